mod settings;

pub use settings::{Config, TomlConfig, TomlJournalConfig, TomlSessionConfig, EXAMPLE_CONFIG};
