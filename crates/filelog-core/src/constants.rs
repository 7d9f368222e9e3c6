//! Constants and default values for filelog

use std::path::{Path, PathBuf};

/// Default flush interval, in seconds, for buffered logs
pub const DEFAULT_FLUSH_INTERVAL_SECS: u32 = 5;

/// Log file extension
pub const LOG_FILE_EXT: &str = "log";

/// Subdirectory that receives rotated log files
pub const ARCHIVE_DIR: &str = "old";

/// File mode for log files (unix)
pub const LOG_FILE_MODE: u32 = 0o660;

/// Directory mode for log directories (unix)
pub const LOG_DIR_MODE: u32 = 0o770;

/// Marker line emitted when a log is created
pub const INIT_MARKER: &str = "==== Log init ====";

/// Marker line emitted when a log is closed
pub const CLOSE_MARKER: &str = "==== Close log ====";

/// Marker line emitted by the flush task as it shuts down
pub const SHUTDOWN_MARKER: &str = "Async log shutdown";

/// Get the backing file path for a named log
pub fn log_file_path(base_dir: &Path, name: &str) -> PathBuf {
    base_dir.join(format!("{}.{}", name, LOG_FILE_EXT))
}

/// Get the archive directory for a base directory
pub fn archive_dir(base_dir: &Path) -> PathBuf {
    base_dir.join(ARCHIVE_DIR)
}

/// Get the archive path for a named log and a YYYYMMDD date stamp
pub fn archive_file_path(base_dir: &Path, date_stamp: &str, name: &str) -> PathBuf {
    archive_dir(base_dir).join(format!("{}-{}.{}", date_stamp, name, LOG_FILE_EXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        let path = log_file_path(Path::new("/var/log/app"), "worker");
        assert_eq!(path, PathBuf::from("/var/log/app/worker.log"));
    }

    #[test]
    fn test_archive_file_path() {
        let path = archive_file_path(Path::new("/var/log/app"), "20260807", "worker");
        assert_eq!(path, PathBuf::from("/var/log/app/old/20260807-worker.log"));
    }
}
