//! Error taxonomy for the journal, the replay console and the interpreter

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error while {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Console I/O error: {0}")]
    Transport(#[source] std::io::Error),
    #[error("Console input closed")]
    InputClosed,
    #[error("Journal is not valid UTF-8")]
    CorruptLog,
    #[error("Journal seed is missing or unparseable: {entry:?}")]
    CorruptSeed { entry: Option<String> },
    #[error("Entry cannot be stored in the journal: {0:?}")]
    InvalidEntry(String),
    #[error("Expected an integer, got {input:?}")]
    Parse { input: String },
    #[error(
        "Replay mismatch at entry {position}: command produced {expected:?}, journal recorded {recorded:?}"
    )]
    ReplayMismatch {
        position: usize,
        expected: String,
        recorded: String,
    },
    #[error("Command finished at entry {position} but {remaining} recorded entries were not replayed")]
    TrailingTrace { position: usize, remaining: usize },
}

impl Error {
    pub fn storage(operation: &'static str, source: std::io::Error) -> Self {
        Self::Storage { operation, source }
    }

    /// Whether the error is the transport running out of input rather than a fault.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
