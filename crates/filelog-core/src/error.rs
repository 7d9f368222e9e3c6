//! Error types for filelog

use std::path::PathBuf;

/// Filelog error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid flush interval: {0} (must be at least 1 second)")]
    InvalidFlushInterval(u32),

    #[error("Log file could not be opened: {0}")]
    OpenFailed(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for filelog
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFlushInterval(0);
        assert_eq!(
            err.to_string(),
            "Invalid flush interval: 0 (must be at least 1 second)"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_config_helper() {
        let err = Error::config("bad value");
        assert_eq!(err.to_string(), "Config error: bad value");
    }
}
