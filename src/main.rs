use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use resumable_calc::journal::parse_entries;
use resumable_calc::{util, Config, FileStorage, Interpreter, Storage, TextConsole};

/// Crash-safe calculator: add, median, rand and help, resumable after any crash.
#[derive(Debug, Parser)]
#[command(name = "resumable-calc", version, about)]
struct Cli {
    /// Data directory for config, logs and the default journal
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Journal file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    journal: Option<PathBuf>,

    /// Wipe the journal before starting (repairs a corrupt seed)
    #[arg(long)]
    reset: bool,

    /// Print the journal entries and exit without running
    #[arg(long)]
    inspect: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (<data dir>/logs/resumable-calc.log).
    // Stdout is the interactive console, so nothing else may write there.
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(path) = cli.journal {
        config = config.with_journal_path(path);
    }

    let mut storage = FileStorage::new(&config.journal_path);

    if cli.reset {
        storage
            .write(&[])
            .with_context(|| format!("resetting {}", config.journal_path.display()))?;
        tracing::warn!(path = %config.journal_path.display(), "Journal reset");
    }

    if cli.inspect {
        let bytes = storage
            .read()
            .with_context(|| format!("reading {}", config.journal_path.display()))?;
        for entry in parse_entries(&bytes)? {
            println!("{entry}");
        }
        return Ok(());
    }

    let interpreter = Interpreter::from_config(&config);
    match interpreter.run(TextConsole::stdio(), storage) {
        Ok(()) => Ok(()),
        Err(e) if e.is_input_closed() => {
            tracing::info!("Input closed; journal kept for the next run");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Interpreter stopped");
            Err(e).with_context(|| format!("journal at {}", config.journal_path.display()))
        }
    }
}
