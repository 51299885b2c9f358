//! Crash-safe command interpreter.
//!
//! Every line the interpreter reads from or shows to the user is recorded in
//! a durable [`journal`] before the call returns. After an abrupt restart the
//! [`console::ReplayConsole`] replays that record so the command in flight
//! resumes exactly where it stopped, without asking for or printing any line
//! twice.

pub mod config;
pub mod console;
pub mod error;
pub mod interpreter;
pub mod journal;
pub mod storage;
pub mod util;

pub use config::Config;
pub use console::{Phase, ReplayConsole, TextConsole, UserConsole};
pub use error::{Error, Result};
pub use interpreter::{Command, ExitPolicy, Interpreter};
pub use journal::{Journal, DEFAULT_SEED};
pub use storage::{FileStorage, MemoryStorage, Storage};
