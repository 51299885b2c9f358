//! Where resumable-calc keeps its journal, config and logs
//!
//! Everything lives under one data directory, `~/.resumable-calc` unless
//! `--data-dir` picks another one at startup.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const DIR_NAME: &str = ".resumable-calc";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Fix the data directory for the rest of the process and return it.
///
/// The first call wins; a later override is ignored.
pub fn init_data_dir(custom_path: Option<PathBuf>) -> &'static Path {
    let requested = custom_path.clone();
    let dir = DATA_DIR.get_or_init(|| custom_path.unwrap_or_else(home_data_dir));
    if let Some(requested) = requested.filter(|path| path != dir) {
        tracing::debug!(
            requested = %requested.display(),
            active = %dir.display(),
            "Ignoring late data directory override"
        );
    }
    dir
}

fn home_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DIR_NAME),
        None => PathBuf::from(DIR_NAME),
    }
}

/// The data directory chosen by [`init_data_dir`], or the home default.
pub fn data_dir() -> PathBuf {
    match DATA_DIR.get() {
        Some(dir) => dir.clone(),
        None => home_data_dir(),
    }
}

/// Journal used when neither config nor `--journal` names one
pub fn journal_path() -> PathBuf {
    data_dir().join("journal.txt")
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Append-only tracing output; stdout belongs to the calculator
pub fn log_file_path() -> PathBuf {
    logs_dir().join("resumable-calc.log")
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
