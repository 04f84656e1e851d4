use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record. Records below the configured minimum are discarded.
///
/// Variant order is the ordinal order, so `Level::Debug < Level::Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// Raised when a level name is not one of the five recognized values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log level {0:?}, expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL")]
pub struct ConfigurationError(pub String);

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ConfigurationError;

    // Case-sensitive: callers that want leniency uppercase first (Config::from_env does).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            other => Err(ConfigurationError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_names() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert!("TRACE".parse::<Level>().is_err());
        assert!("info".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
        assert!("WARN".parse::<Level>().is_err());
    }

    #[test]
    fn test_error_carries_offending_value() {
        let err = "TRACE".parse::<Level>().unwrap_err();
        assert_eq!(err, ConfigurationError("TRACE".to_string()));
        assert!(err.to_string().contains("TRACE"));
    }

    #[test]
    fn test_ordinal_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Level::Critical.to_string(), "CRITICAL");
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }
}
