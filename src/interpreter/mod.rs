//! Command dispatcher
//!
//! Reads a command name, runs it to completion through the replay console,
//! then compacts the journal back to the seed before the next name is read.

mod arith;
mod command;
mod help;

pub use arith::{
    add, format_median, lehmer_next, median, parse_number, LEHMER_MODULUS, LEHMER_MULTIPLIER,
};
pub use command::Command;
pub use help::{run_help, HelpTable, HELP_TABLE};

use serde::Deserialize;

use crate::config::Config;
use crate::console::{Phase, ReplayConsole, UserConsole};
use crate::error::{Error, Result};
use crate::journal::{Journal, DEFAULT_SEED};
use crate::storage::Storage;

/// Reply to a command name the interpreter does not know.
pub const NO_SUCH_COMMAND: &str = "no such command, use help for the command list";

/// What the journal holds after `exit`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPolicy {
    /// Keep the seed so the generator continues in the next session.
    #[default]
    Compact,
    /// Wipe the journal; the next session starts from the default seed.
    Clear,
}

#[derive(Debug, Clone)]
pub struct Interpreter {
    default_seed: i64,
    exit_policy: ExitPolicy,
    help: HelpTable,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            default_seed: DEFAULT_SEED,
            exit_policy: ExitPolicy::default(),
            help: HELP_TABLE,
        }
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self::default()
            .with_default_seed(config.default_seed)
            .with_exit_policy(config.exit_policy)
    }

    pub fn with_default_seed(mut self, seed: i64) -> Self {
        self.default_seed = seed;
        self
    }

    pub fn with_exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.exit_policy = policy;
        self
    }

    /// Run until `exit`, resuming whatever command `storage` recorded.
    ///
    /// Any error leaves the journal as it was after the last completed I/O,
    /// so calling `run` again with the same storage picks up from there.
    pub fn run<C: UserConsole, S: Storage>(&self, console: C, storage: S) -> Result<()> {
        let journal = Journal::open(storage, self.default_seed)?;
        let mut io = ReplayConsole::new(console, journal)?;

        loop {
            let name = io.read_line()?;
            let command = Command::parse(&name);
            tracing::debug!(?command, phase = ?io.phase(), "Dispatching command");

            match command {
                Command::Exit => break,
                Command::Add => run_add(&mut io)?,
                Command::Median => run_median(&mut io)?,
                Command::Rand => run_rand(&mut io)?,
                Command::Help => run_help(&mut io, &self.help)?,
                Command::Unknown(_) => io.write_line(NO_SUCH_COMMAND)?,
            }

            io.mark_command_boundary()?;
        }

        tracing::info!(policy = ?self.exit_policy, "Session finished");
        match self.exit_policy {
            ExitPolicy::Compact => io.close().map(drop),
            ExitPolicy::Clear => io.discard(),
        }
    }
}

fn read_number<C: UserConsole, S: Storage>(io: &mut ReplayConsole<C, S>) -> Result<i64> {
    io.read_value(parse_number)
}

fn run_add<C: UserConsole, S: Storage>(io: &mut ReplayConsole<C, S>) -> Result<()> {
    let a = read_number(io)?;
    let b = read_number(io)?;
    io.write_line(&add(a, b).to_string())
}

fn run_median<C: UserConsole, S: Storage>(io: &mut ReplayConsole<C, S>) -> Result<()> {
    let count = read_number(io)?;
    let mut numbers = Vec::new();
    for _ in 0..count.max(0) {
        numbers.push(read_number(io)?);
    }
    io.write_line(&format_median(median(&mut numbers)))
}

/// Emit `count` generator values, committing the next seed after each one.
///
/// While replaying, each value comes from the trace and must continue the
/// generator sequence. Replay never rewrites the seed, except for the last
/// recorded value when the crash hit before its seed was advanced.
fn run_rand<C: UserConsole, S: Storage>(io: &mut ReplayConsole<C, S>) -> Result<()> {
    let count = read_number(io)?;
    let mut previous = None;
    for _ in 0..count.max(0) {
        let position = io.cursor();
        let value = match io.peek_replay().map(str::to_owned) {
            Some(recorded) => {
                let value = replayed_value(position, &recorded, previous)?;
                io.write_line(&recorded)?;
                if io.phase() == Phase::Live {
                    settle_seed(io, position, value)?;
                }
                value
            }
            None => {
                let value = io.seed()?;
                io.write_line(&value.to_string())?;
                io.advance_random_seed(lehmer_next(value))?;
                value
            }
        };
        previous = Some(value);
    }
    Ok(())
}

/// Parse a recorded generator value and check it follows `previous`.
fn replayed_value(position: usize, recorded: &str, previous: Option<i64>) -> Result<i64> {
    let mismatch = |expected: String| Error::ReplayMismatch {
        position,
        expected,
        recorded: recorded.to_string(),
    };

    let value = recorded
        .parse::<i64>()
        .map_err(|_| mismatch("a generator value".to_string()))?;
    match previous.map(lehmer_next) {
        Some(expected) if expected != value => Err(mismatch(expected.to_string())),
        _ => Ok(value),
    }
}

/// Reconcile the persisted seed with the last value found in the trace.
///
/// The seed is either still `value` (the crash hit between recording it and
/// advancing) or already one step past it. Anything else means the trace and
/// the seed disagree.
fn settle_seed<C: UserConsole, S: Storage>(
    io: &mut ReplayConsole<C, S>,
    position: usize,
    value: i64,
) -> Result<()> {
    let seed = io.seed()?;
    let next = lehmer_next(value);
    if seed == value {
        tracing::debug!(seed = next, "Committing seed left behind by interrupted rand");
        return io.advance_random_seed(next);
    }
    if seed != next {
        return Err(Error::ReplayMismatch {
            position,
            expected: seed.to_string(),
            recorded: value.to_string(),
        });
    }
    Ok(())
}
