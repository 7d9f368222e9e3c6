//! Polymorphic log handle

use crate::buffered::BufferedLog;
use crate::direct::DirectLog;
use std::fmt;
use std::path::Path;

/// Which writer strategy a log uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Entries accumulate in memory and flush on a timer
    Buffered,
    /// Every entry is written to disk synchronously
    Direct,
}

/// A file-backed log using either writer strategy.
///
/// Callers interact with the shared capability set here; rotation and
/// other kind-specific logic branch on the variant.
pub enum FileLog {
    Buffered(BufferedLog),
    Direct(DirectLog),
}

impl fmt::Debug for FileLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLog")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

impl FileLog {
    pub fn kind(&self) -> LogKind {
        match self {
            FileLog::Buffered(_) => LogKind::Buffered,
            FileLog::Direct(_) => LogKind::Direct,
        }
    }

    /// Base directory of the backing file
    pub fn base_dir(&self) -> &Path {
        match self {
            FileLog::Buffered(log) => log.base_dir(),
            FileLog::Direct(log) => log.base_dir(),
        }
    }

    /// Friendly name of the log
    pub fn name(&self) -> &str {
        match self {
            FileLog::Buffered(log) => log.name(),
            FileLog::Direct(log) => log.name(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            FileLog::Buffered(log) => log.is_enabled(),
            FileLog::Direct(log) => log.is_enabled(),
        }
    }

    /// Format and record a new entry, unless the log is disabled
    pub fn print(&self, args: fmt::Arguments<'_>) {
        match self {
            FileLog::Buffered(log) => log.print(args),
            FileLog::Direct(log) => log.print(args),
        }
    }

    /// Resume accepting entries
    pub fn enable(&self) {
        match self {
            FileLog::Buffered(log) => log.enable(),
            FileLog::Direct(log) => log.enable(),
        }
    }

    /// Drop subsequent entries. An in-flight print still completes.
    pub fn disable(&self) {
        match self {
            FileLog::Buffered(log) => log.disable(),
            FileLog::Direct(log) => log.disable(),
        }
    }

    /// Close the log, draining any pending entries to disk and releasing
    /// the backing file. A closed log must not be used again.
    pub async fn close(&self) {
        match self {
            FileLog::Buffered(log) => log.close().await,
            FileLog::Direct(log) => log.close(),
        }
    }
}
