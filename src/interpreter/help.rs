//! `help` sub-mode
//!
//! The sub-mode runs its own read loop through the same replay console as
//! the top level, so a crash inside help resumes like any other command.

use crate::console::{ReplayConsole, UserConsole};
use crate::error::Result;
use crate::storage::Storage;

/// Fixed texts shown by the help sub-mode.
#[derive(Debug, Clone, Copy)]
pub struct HelpTable {
    pub intro: &'static str,
    pub command_list: &'static str,
    pub exit_hint: &'static str,
    pub unknown_topic: &'static str,
    /// Topic name that leaves the sub-mode.
    pub end_command: &'static str,
    pub topics: &'static [(&'static str, &'static str)],
}

impl HelpTable {
    pub fn describe(&self, topic: &str) -> Option<&'static str> {
        self.topics
            .iter()
            .find(|(name, _)| *name == topic)
            .map(|(_, text)| *text)
    }
}

pub const HELP_TABLE: HelpTable = HelpTable {
    intro: "Specify a command to see its help",
    command_list: "Available commands: add, median, rand",
    exit_hint: "To leave help mode, type end",
    unknown_topic: "No such command",
    end_command: "end",
    topics: &[
        ("add", "Computes the sum of two numbers"),
        ("median", "Computes the median of a list of numbers"),
        ("rand", "Generates a list of pseudo-random numbers"),
    ],
};

pub fn run_help<C: UserConsole, S: Storage>(
    io: &mut ReplayConsole<C, S>,
    table: &HelpTable,
) -> Result<()> {
    io.write_line(table.intro)?;
    io.write_line(table.command_list)?;
    io.write_line(table.exit_hint)?;

    loop {
        let topic = io.read_line()?;
        if topic == table.end_command {
            return Ok(());
        }

        match table.describe(&topic) {
            Some(text) => {
                io.write_line(text)?;
            }
            None => {
                tracing::debug!(topic = %topic, "Unknown help topic");
                io.write_line(table.unknown_topic)?;
                io.write_line(table.command_list)?;
            }
        }
        io.write_line(table.exit_hint)?;
    }
}
