//! Append-mode file sink

use filelog_core::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::error;

/// Owns an open, append-mode log file
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Open (or create) the file at `path` for appending
    pub fn open(path: &Path) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(filelog_core::constants::LOG_FILE_MODE);
        }

        let file = options.open(path)?;

        Ok(Self { file })
    }

    /// Append bytes to the file. Write-all semantics.
    pub fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.file.write_all(bytes)?;
        Ok(bytes.len())
    }

    /// Force written bytes to durable storage
    pub fn sync(&mut self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Sync and release the file handle
    pub fn close(self) -> io::Result<()> {
        self.file.sync_all()
    }
}

/// A write or sync failure after a log is running has no safe degraded
/// mode; log loudly and abort the process. No retries are attempted.
pub(crate) fn durability_failure(context: &str, err: io::Error) -> ! {
    error!("Unrecoverable log I/O failure during {}: {}", context, err);
    std::process::abort();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.log");

        let _sink = FileSink::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.log");

        {
            let mut sink = FileSink::open(&path).unwrap();
            assert_eq!(sink.write(b"first\n").unwrap(), 6);
            sink.close().unwrap();
        }
        {
            let mut sink = FileSink::open(&path).unwrap();
            sink.write(b"second\n").unwrap();
            sink.sync().unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
