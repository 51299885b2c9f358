use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::interpreter::ExitPolicy;
use crate::journal::DEFAULT_SEED;
use crate::util::paths::{config_path, journal_path};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File backing the journal
    pub journal_path: PathBuf,
    /// Seed for a journal that has never been used
    pub default_seed: i64,
    /// What `exit` leaves in the journal
    pub exit_policy: ExitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_path: journal_path(),
            default_seed: DEFAULT_SEED,
            exit_policy: ExitPolicy::Compact,
        }
    }
}

/// TOML representation of the `[journal]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlJournalConfig {
    pub path: Option<PathBuf>,
    pub default_seed: Option<i64>,
}

/// TOML representation of the `[session]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlSessionConfig {
    pub exit_policy: Option<ExitPolicy>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub journal: Option<TomlJournalConfig>,
    pub session: Option<TomlSessionConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match fs::read_to_string(&config_file) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        path = %config_file.display(),
                        error = %e,
                        "Ignoring malformed config file"
                    );
                    Config::default()
                }
            },
            Err(e) => {
                tracing::debug!(
                    path = %config_file.display(),
                    error = %e,
                    "No readable config file, using defaults"
                );
                Config::default()
            }
        }
    }

    /// Parse `contents` and merge it on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        Ok(Config::default().merge(toml_config))
    }

    fn merge(mut self, toml_config: TomlConfig) -> Self {
        if let Some(journal) = toml_config.journal {
            if let Some(path) = journal.path {
                self.journal_path = path;
            }
            if let Some(seed) = journal.default_seed {
                self.default_seed = seed;
            }
        }

        if let Some(session) = toml_config.session {
            if let Some(policy) = session.exit_policy {
                self.exit_policy = policy;
            }
        }

        self
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_journal_path(mut self, path: PathBuf) -> Self {
        self.journal_path = path;
        self
    }
}
