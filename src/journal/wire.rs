//! Journal wire format: UTF-8 text, one entry per `\n`-terminated line.

use crate::error::{Error, Result};

/// Split the persisted bytes into entries, dropping blank lines.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes).map_err(|_| Error::CorruptLog)?;
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}

/// Inverse of [`parse_entries`] for entries that passed [`validate_entry`].
pub fn render_entries<I, T>(entries: I) -> Vec<u8>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut bytes = Vec::new();
    for entry in entries {
        bytes.extend_from_slice(entry.as_ref().as_bytes());
        bytes.push(b'\n');
    }
    bytes
}

/// An entry must survive a render/parse cycle unchanged: no line breaks, not blank.
pub fn validate_entry(entry: &str) -> Result<()> {
    if entry.trim().is_empty() || entry.contains(['\n', '\r']) {
        return Err(Error::InvalidEntry(entry.to_string()));
    }
    Ok(())
}

/// Interpret the first journal entry as the generator seed.
pub fn parse_seed(entry: Option<&str>) -> Result<i64> {
    let entry = entry.ok_or(Error::CorruptSeed { entry: None })?;
    entry.trim().parse::<i64>().map_err(|_| Error::CorruptSeed {
        entry: Some(entry.to_string()),
    })
}
