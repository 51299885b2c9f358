//! Durable I/O journal
//!
//! The journal is the persisted log of the command currently in flight.
//! Entry 0 always holds the pseudo-random seed; entries after it are the
//! trace of every line read from or written to the user since the last
//! command boundary. Each mutation is one full overwrite of the storage, so
//! a crash leaves either the state before the call or the state after it.

mod wire;

pub use wire::{parse_entries, parse_seed, render_entries, validate_entry};

use crate::error::{Error, Result};
use crate::storage::Storage;

/// Seed written into a journal that has never been used.
pub const DEFAULT_SEED: i64 = 420;

/// Ordered entry log layered over a read-all/overwrite-all storage.
#[derive(Debug)]
pub struct Journal<S> {
    storage: S,
}

impl<S: Storage> Journal<S> {
    /// Open the journal, seeding an empty storage with `default_seed`.
    pub fn open(storage: S, default_seed: i64) -> Result<Self> {
        let mut journal = Self { storage };
        if journal.read_bytes()?.is_empty() {
            tracing::info!(seed = default_seed, "Initializing empty journal");
            journal.append(&default_seed.to_string())?;
        }
        Ok(journal)
    }

    /// All entries, seed first, parsed fresh from storage.
    pub fn read_all(&self) -> Result<Vec<String>> {
        parse_entries(&self.read_bytes()?)
    }

    /// The current generator seed (entry 0).
    pub fn seed(&self) -> Result<i64> {
        let entries = self.read_all()?;
        parse_seed(entries.first().map(String::as_str))
    }

    /// Durably add one entry at the end of the log.
    pub fn append(&mut self, entry: &str) -> Result<()> {
        validate_entry(entry)?;

        let mut bytes = self.read_bytes()?;
        if bytes.last().is_some_and(|b| *b != b'\n') {
            bytes.push(b'\n');
        }
        bytes.extend_from_slice(entry.as_bytes());
        bytes.push(b'\n');

        self.write_bytes("appending journal entry", &bytes)?;
        tracing::trace!(entry, "Appended journal entry");
        Ok(())
    }

    /// Rewrite entry 0 with `seed`, keeping the current trace intact.
    pub fn replace_seed(&mut self, seed: i64) -> Result<()> {
        let entries = self.read_all()?;
        if entries.is_empty() {
            return Err(Error::CorruptSeed { entry: None });
        }

        let seed = seed.to_string();
        let trace = entries.iter().skip(1).map(String::as_str);
        let bytes = render_entries(std::iter::once(seed.as_str()).chain(trace));

        self.write_bytes("replacing journal seed", &bytes)?;
        tracing::debug!(seed = %seed, entries = entries.len(), "Replaced journal seed");
        Ok(())
    }

    /// Drop the trace, leaving only the seed.
    pub fn compact_to_seed(&mut self) -> Result<()> {
        let entries = self.read_all()?;
        let seed = parse_seed(entries.first().map(String::as_str))?;

        self.write_bytes("compacting journal", &render_entries([seed.to_string()]))?;
        tracing::debug!(seed, dropped = entries.len() - 1, "Compacted journal to seed");
        Ok(())
    }

    /// Wipe the storage completely. The next [`Journal::open`] reseeds it.
    pub fn clear(&mut self) -> Result<()> {
        self.write_bytes("clearing journal", &[])?;
        tracing::debug!("Cleared journal");
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        self.storage
            .read()
            .map_err(|e| Error::storage("reading journal", e))
    }

    fn write_bytes(&mut self, operation: &'static str, bytes: &[u8]) -> Result<()> {
        self.storage
            .write(bytes)
            .map_err(|e| Error::storage(operation, e))
    }
}
