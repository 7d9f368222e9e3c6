//! Synchronous file-backed log

use crate::format::LineFormatter;
use crate::sink::{self, FileSink};
use filelog_core::{constants, LogConfig};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// File-backed log that writes every entry synchronously to disk
pub struct DirectLog {
    base_dir: PathBuf,
    name: String,
    config: LogConfig,
    formatter: LineFormatter,
    enabled: AtomicBool,
    /// Gates in-flight prints (shared) against close (exclusive)
    gate: RwLock<()>,
    sink: Mutex<Option<FileSink>>,
}

impl DirectLog {
    pub(crate) fn new(base_dir: PathBuf, name: String, config: LogConfig, file: FileSink) -> Self {
        let formatter = LineFormatter::new(&name, &config);

        Self {
            base_dir,
            name,
            config,
            formatter,
            enabled: AtomicBool::new(true),
            gate: RwLock::new(()),
            sink: Mutex::new(Some(file)),
        }
    }

    /// Base directory of the backing file
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Friendly name of the log
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub(crate) fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Format and write a new entry, unless the log is disabled
    pub fn print(&self, args: fmt::Arguments<'_>) {
        let _guard = self.gate.read();

        if !self.enabled.load(Ordering::SeqCst) {
            return;
        }

        self.write_line(args);
    }

    /// Drop subsequent entries. An in-flight print still completes.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    /// Resume accepting entries
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    /// Disable the log, write the close marker, sync, and release the
    /// backing file. A second call is a no-op.
    pub fn close(&self) {
        let _guard = self.gate.write();

        self.enabled.store(false, Ordering::SeqCst);

        let Some(mut file) = self.sink.lock().take() else {
            return;
        };

        // the marker bypasses the now-disabled public path
        let line = self
            .formatter
            .format(format_args!("{}", constants::CLOSE_MARKER));
        if let Err(e) = file.write(line.as_bytes()) {
            sink::durability_failure("close write", e);
        }
        if let Err(e) = file.close() {
            sink::durability_failure("close sync", e);
        }

        debug!("Closed direct log {}", self.name);
    }

    /// Ungated write path shared by print and the close marker
    fn write_line(&self, args: fmt::Arguments<'_>) {
        let line = self.formatter.format(args);

        if let Some(file) = self.sink.lock().as_mut() {
            if let Err(e) = file.write(line.as_bytes()) {
                sink::durability_failure("write", e);
            }
        }
    }
}
