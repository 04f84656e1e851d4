use std::env;
use std::path::PathBuf;

use crate::level::{ConfigurationError, Level};

pub const LOG_PATH_VAR: &str = "LOG_PATH";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const PRINT_TO_CONSOLE_VAR: &str = "PRINT_TO_CONSOLE";

/// Logger configuration, normally sourced from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory for daily log files, created (with parents) if missing.
    pub log_dir: PathBuf,
    /// Minimum severity; records below this reach no sink.
    pub min_level: Level,
    /// Whether to echo records to the console with color-coded severity.
    pub echo_to_console: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            min_level: Level::Info,
            echo_to_console: true,
        }
    }
}

impl Config {
    /// Read configuration from `LOG_PATH`, `LOG_LEVEL` and `PRINT_TO_CONSOLE`.
    ///
    /// An unset `LOG_LEVEL` defaults to INFO; a set-but-unrecognized value
    /// (after uppercasing) is a fatal `ConfigurationError`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let mut config = Config::default();

        if let Ok(path) = env::var(LOG_PATH_VAR) {
            config.log_dir = PathBuf::from(path);
        }

        if let Ok(raw) = env::var(LOG_LEVEL_VAR) {
            config.min_level = raw.to_uppercase().parse()?;
        }

        if let Ok(raw) = env::var(PRINT_TO_CONSOLE_VAR) {
            config.echo_to_console = raw.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}
