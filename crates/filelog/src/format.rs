//! Canonical log line formatting

use chrono::Local;
use filelog_core::LogConfig;
use std::fmt;

/// Formats log entries into the canonical on-disk line shape
#[derive(Debug, Clone)]
pub struct LineFormatter {
    tag: String,
    timestamps: bool,
}

impl LineFormatter {
    pub fn new(name: &str, config: &LogConfig) -> Self {
        Self {
            tag: name.to_uppercase(),
            timestamps: config.timestamps,
        }
    }

    /// Build the canonical line `[TAG] message` with a guaranteed single
    /// trailing newline. With timestamps enabled, a local timestamp
    /// precedes the tag.
    pub fn format(&self, args: fmt::Arguments<'_>) -> String {
        let mut line = if self.timestamps {
            format!(
                "[{}] [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                self.tag,
                args
            )
        } else {
            format!("[{}] {}", self.tag, args)
        };

        if !line.ends_with('\n') {
            line.push('\n');
        }

        line
    }
}
