use crate::error::{Error, Result};
use crate::journal::{parse_seed, validate_entry, Journal};
use crate::storage::Storage;

use super::UserConsole;

/// Where the cursor stands relative to the recorded trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Recorded entries remain; I/O is served from the journal.
    Replaying,
    /// The trace is exhausted; I/O reaches the user and is recorded.
    Live,
}

/// Journal-backed console that resumes a command after a crash.
///
/// Every call first tries to satisfy itself from the recorded trace. Reads
/// return the recorded line and writes consume the recorded line without
/// showing it again. Once the trace is exhausted the call goes to the real
/// console and the line is appended to the journal before the call returns.
pub struct ReplayConsole<C, S> {
    console: C,
    journal: Journal<S>,
    /// Cached `journal.read_all()`, updated after every durable write.
    entries: Vec<String>,
    /// Index of the next entry to replay; 0 is the seed.
    cursor: usize,
}

impl<C: UserConsole, S: Storage> ReplayConsole<C, S> {
    pub fn new(console: C, journal: Journal<S>) -> Result<Self> {
        let entries = journal.read_all()?;
        parse_seed(entries.first().map(String::as_str))?;

        if entries.len() > 1 {
            tracing::info!(
                recorded = entries.len() - 1,
                "Resuming interrupted command from journal"
            );
        }

        Ok(Self {
            console,
            journal,
            entries,
            cursor: 1,
        })
    }

    pub fn phase(&self) -> Phase {
        if self.cursor < self.entries.len() {
            Phase::Replaying
        } else {
            Phase::Live
        }
    }

    /// Position of the next entry to replay or record.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The recorded entry the next read or write would consume, if any.
    pub fn peek_replay(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Current generator seed as persisted.
    pub fn seed(&self) -> Result<i64> {
        self.journal.seed()
    }

    pub fn read_line(&mut self) -> Result<String> {
        if let Some(recorded) = self.entries.get(self.cursor) {
            let line = recorded.clone();
            tracing::trace!(position = self.cursor, "Replayed input");
            self.cursor += 1;
            return Ok(line);
        }

        let line = self.read_live()?;
        self.record(line.clone())?;
        Ok(line)
    }

    /// Read a line and convert it with `parse`, recording it only if it converts.
    ///
    /// Rejected live input is not journaled, so after a restart the same
    /// position is asked for again instead of failing on every replay.
    pub fn read_value<T>(&mut self, parse: impl FnOnce(&str) -> Result<T>) -> Result<T> {
        if let Some(recorded) = self.entries.get(self.cursor) {
            let value = parse(recorded)?;
            tracing::trace!(position = self.cursor, "Replayed input");
            self.cursor += 1;
            return Ok(value);
        }

        let line = self.read_live()?;
        let value = parse(&line)?;
        self.record(line)?;
        Ok(value)
    }

    pub fn write_line(&mut self, content: &str) -> Result<()> {
        if let Some(recorded) = self.entries.get(self.cursor) {
            if recorded != content {
                return Err(Error::ReplayMismatch {
                    position: self.cursor,
                    expected: content.to_string(),
                    recorded: recorded.clone(),
                });
            }
            tracing::trace!(position = self.cursor, "Replayed output");
            self.cursor += 1;
            return Ok(());
        }

        validate_entry(content)?;
        self.console.write_line(content)?;
        self.record(content.to_string())
    }

    /// Persist the next generator seed without touching the trace.
    ///
    /// The seed is absolute, so repeating the call for a value that was
    /// already committed before a crash is a no-op.
    pub fn advance_random_seed(&mut self, seed: i64) -> Result<()> {
        if self.journal.seed()? == seed {
            return Ok(());
        }
        self.journal.replace_seed(seed)?;
        self.entries[0] = seed.to_string();
        Ok(())
    }

    /// Finish the current command: drop its trace and rewind to the seed.
    pub fn mark_command_boundary(&mut self) -> Result<()> {
        self.ensure_trace_consumed()?;
        self.journal.compact_to_seed()?;
        self.entries.truncate(1);
        self.cursor = 1;
        Ok(())
    }

    /// End the session leaving only the seed in the journal.
    pub fn close(mut self) -> Result<Journal<S>> {
        self.mark_command_boundary()?;
        Ok(self.journal)
    }

    /// End the session leaving the journal empty.
    pub fn discard(mut self) -> Result<()> {
        self.ensure_trace_consumed()?;
        self.journal.clear()
    }

    /// Next non-blank line from the real console, trimmed.
    fn read_live(&mut self) -> Result<String> {
        loop {
            let raw = self.console.read_line()?;
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    fn record(&mut self, entry: String) -> Result<()> {
        self.journal.append(&entry)?;
        self.entries.push(entry);
        self.cursor += 1;
        Ok(())
    }

    fn ensure_trace_consumed(&self) -> Result<()> {
        if self.cursor < self.entries.len() {
            return Err(Error::TrailingTrace {
                position: self.cursor,
                remaining: self.entries.len() - self.cursor,
            });
        }
        Ok(())
    }
}

impl<C: UserConsole, S: Storage> UserConsole for ReplayConsole<C, S> {
    fn read_line(&mut self) -> Result<String> {
        ReplayConsole::read_line(self)
    }

    fn write_line(&mut self, content: &str) -> Result<()> {
        ReplayConsole::write_line(self, content)
    }
}
