//! Configuration file parsing for filelog
//!
//! Logger behavior that the legacy implementation controlled through
//! process-global flags is modeled here as explicit per-instance
//! configuration, so independent logger instances cannot stomp each
//! other's defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_FLUSH_INTERVAL_SECS;
use crate::error::{Error, Result};

/// Per-logger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Interval between background flushes in seconds (buffered logs only)
    pub flush_interval_secs: u32,
    /// Prefix each line with a local timestamp
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            flush_interval_secs: DEFAULT_FLUSH_INTERVAL_SECS,
            timestamps: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: LogConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.flush_interval_secs == 0 {
            return Err(Error::InvalidFlushInterval(self.flush_interval_secs));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.flush_interval_secs, 5);
        assert!(!config.timestamps);
    }

    #[test]
    fn test_load_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filelog.toml");

        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "flush_interval_secs = 2").unwrap();
            writeln!(file, "timestamps = true").unwrap();
        }

        let config = LogConfig::load(&path).unwrap();
        assert_eq!(config.flush_interval_secs, 2);
        assert!(config.timestamps);
    }

    #[test]
    fn test_load_partial_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filelog.toml");
        std::fs::write(&path, "timestamps = true\n").unwrap();

        let config = LogConfig::load(&path).unwrap();
        assert_eq!(config.flush_interval_secs, 5);
        assert!(config.timestamps);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LogConfig::load(Path::new("/nonexistent/filelog.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filelog.toml");
        std::fs::write(&path, "flush_interval_secs = 0\n").unwrap();

        let err = LogConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidFlushInterval(0)));
    }
}
