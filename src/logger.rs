use std::fmt;
use std::fs;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::config::Config;
use crate::format::Record;
use crate::level::{ConfigurationError, Level};
use crate::sink::{ConsoleSink, FileSink, Sink};

/// Why `init` refused to set up the logger.
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigurationError),
    #[error("failed to open log destination: {0}")]
    Io(#[from] std::io::Error),
}

/// The process-wide logger. Obtain one through [`init`] or [`init_from_env`].
pub struct Logger {
    min_level: Level,
    sinks: Vec<Box<dyn Sink>>,
}

/// Shared handle to the process-wide logger.
pub type LoggerHandle = Arc<Logger>;

static GLOBAL: OnceLock<LoggerHandle> = OnceLock::new();

impl Logger {
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Emit one record. Records below the minimum severity reach no sink.
    /// Sink write failures at runtime are dropped, matching ordinary logging
    /// backends; only initialization surfaces errors.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>, file: &str, line: u32) {
        if level < self.min_level {
            return;
        }
        let message = args.to_string();
        let record = Record {
            timestamp: chrono::Local::now(),
            level,
            message: &message,
            file,
            line,
        };
        for sink in &self.sinks {
            let _ = sink.write(&record);
        }
    }
}

/// Set up the process-wide logger from an explicit [`Config`].
///
/// Creates `config.log_dir` (and missing parents), opens today's
/// `DD-MM-YYYY.log` in append mode, and attaches a colorized console echo when
/// `config.echo_to_console` is set. The first successful call installs the
/// handle for the logging macros; the returned handle is usable either way.
pub fn init(config: Config) -> Result<LoggerHandle, InitError> {
    fs::create_dir_all(&config.log_dir)?;

    let mut sinks: Vec<Box<dyn Sink>> = vec![Box::new(FileSink::open(&config.log_dir)?)];
    if config.echo_to_console {
        sinks.push(Box::new(ConsoleSink::new()));
    }

    let logger: LoggerHandle = Arc::new(Logger {
        min_level: config.min_level,
        sinks,
    });

    // First init wins the global slot; later calls still get a working handle.
    let _ = GLOBAL.set(Arc::clone(&logger));

    logger.log(
        Level::Debug,
        format_args!("Logger initialized successfully with level: {}", config.min_level),
        file!(),
        line!(),
    );

    Ok(logger)
}

/// Set up the process-wide logger from `LOG_PATH`, `LOG_LEVEL` and
/// `PRINT_TO_CONSOLE`. An invalid `LOG_LEVEL` aborts before any sink or
/// directory is created.
pub fn init_from_env() -> Result<LoggerHandle, InitError> {
    let config = Config::from_env()?;
    init(config)
}

/// The installed handle, if [`init`] has run.
pub fn global() -> Option<&'static LoggerHandle> {
    GLOBAL.get()
}

/// Macro plumbing: route one record through the global logger, if any.
#[doc(hidden)]
pub fn log_at(level: Level, args: fmt::Arguments<'_>, file: &str, line: u32) {
    if let Some(logger) = global() {
        logger.log(level, args, file, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use crate::sink::daily_file_name;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("daylog_test_{}", uuid::Uuid::new_v4()))
    }

    fn todays_file(dir: &PathBuf) -> PathBuf {
        dir.join(daily_file_name(chrono::Local::now().date_naive()))
    }

    fn config(dir: &PathBuf, min_level: Level) -> Config {
        Config {
            log_dir: dir.clone(),
            min_level,
            echo_to_console: false,
        }
    }

    #[test]
    fn test_init_creates_nested_directories() -> anyhow::Result<()> {
        let dir = temp_dir().join("a").join("b").join("c");
        assert!(!dir.exists());

        let _logger = init(config(&dir, Level::Info))?;
        assert!(dir.is_dir());
        assert!(todays_file(&dir).is_file());

        fs::remove_dir_all(dir.ancestors().nth(3).unwrap())?;
        Ok(())
    }

    #[test]
    fn test_min_level_filters_both_directions() -> anyhow::Result<()> {
        let dir = temp_dir();
        let logger = init(config(&dir, Level::Warning))?;

        logger.log(Level::Info, format_args!("hello"), "main.rs", 1);
        logger.log(Level::Warning, format_args!("careful"), "main.rs", 2);

        let content = fs::read_to_string(todays_file(&dir))?;
        assert!(!content.contains("hello"), "INFO is below the minimum");
        assert!(content.contains(" - WARNING - careful - (main.rs:2)"));
        assert!(!content.contains('\x1b'));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_second_init_appends_same_day() -> anyhow::Result<()> {
        let dir = temp_dir();

        let first = init(config(&dir, Level::Info))?;
        first.log(Level::Info, format_args!("from first"), "main.rs", 1);

        let second = init(config(&dir, Level::Info))?;
        second.log(Level::Info, format_args!("from second"), "main.rs", 2);

        let content = fs::read_to_string(todays_file(&dir))?;
        assert!(content.contains("from first"), "prior lines must survive");
        assert!(content.contains("from second"));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_debug_confirmation_record() -> anyhow::Result<()> {
        let dir = temp_dir();
        let _logger = init(config(&dir, Level::Debug))?;

        let content = fs::read_to_string(todays_file(&dir))?;
        assert!(content.contains(" - DEBUG - Logger initialized successfully with level: DEBUG - "));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_confirmation_suppressed_above_debug() -> anyhow::Result<()> {
        let dir = temp_dir();
        let _logger = init(config(&dir, Level::Error))?;

        let content = fs::read_to_string(todays_file(&dir))?;
        assert!(content.is_empty());

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_handle_reports_min_level() -> anyhow::Result<()> {
        let dir = temp_dir();
        let logger = init(config(&dir, Level::Critical))?;
        assert_eq!(logger.min_level(), Level::Critical);

        fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
