//! Buffered file-backed log with a background flush task
//!
//! Entries are formatted and appended to an in-memory buffer; a single
//! long-lived tokio task drains the buffer to the backing file at a
//! configurable interval. `close` runs a two-message rendezvous with the
//! task (shutdown signal, then acknowledgment) before the final drain, so
//! no buffered entry is ever lost to an exiting task.

use crate::format::LineFormatter;
use crate::sink::{self, FileSink};
use filelog_core::{constants, Error, LogConfig, Result};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// State shared between the log handle and its flush task
struct Shared {
    formatter: LineFormatter,
    enabled: AtomicBool,
    flush_secs: AtomicU32,
    /// Gates buffer appends (shared) against drains and close (exclusive)
    gate: RwLock<()>,
    /// Pending entry bytes. Appended under the shared gate; drained only
    /// under the exclusive gate. The mutex serializes concurrent appends.
    buffer: Mutex<Vec<u8>>,
    sink: Mutex<Option<FileSink>>,
}

impl Shared {
    /// Append a formatted line to the buffer, bypassing the enabled flag
    fn append(&self, args: fmt::Arguments<'_>) {
        let line = self.formatter.format(args);
        self.buffer.lock().extend_from_slice(line.as_bytes());
    }

    /// Drain the buffer and write the snapshot to the backing file,
    /// followed by a durability sync. An empty buffer elides both.
    fn flush(&self) {
        let _guard = self.gate.write();

        let pending = std::mem::take(&mut *self.buffer.lock());
        if pending.is_empty() {
            return;
        }

        let mut sink = self.sink.lock();
        let Some(file) = sink.as_mut() else {
            return;
        };

        if let Err(e) = file.write(&pending) {
            sink::durability_failure("flush write", e);
        }
        if let Err(e) = file.sync() {
            sink::durability_failure("flush sync", e);
        }

        trace!("Flushed {} buffered log bytes", pending.len());
    }
}

/// File-backed log that accumulates entries in memory and flushes them to
/// disk at a configurable interval from a background task
pub struct BufferedLog {
    base_dir: PathBuf,
    name: String,
    config: LogConfig,
    shared: Arc<Shared>,
    shutdown_tx: mpsc::Sender<oneshot::Sender<()>>,
    flush_task: Mutex<Option<JoinHandle<()>>>,
}

impl BufferedLog {
    /// Construct the log around an open sink and start its flush task.
    /// Must be called from within a tokio runtime.
    pub(crate) fn new(base_dir: PathBuf, name: String, config: LogConfig, file: FileSink) -> Self {
        let shared = Arc::new(Shared {
            formatter: LineFormatter::new(&name, &config),
            enabled: AtomicBool::new(true),
            flush_secs: AtomicU32::new(config.flush_interval_secs),
            gate: RwLock::new(()),
            buffer: Mutex::new(Vec::new()),
            sink: Mutex::new(Some(file)),
        });

        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let flush_task = tokio::spawn(flush_loop(Arc::clone(&shared), shutdown_rx));

        Self {
            base_dir,
            name,
            config,
            shared,
            shutdown_tx,
            flush_task: Mutex::new(Some(flush_task)),
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
        self.shared.enabled.load(Ordering::SeqCst)
    }

    pub(crate) fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Format and buffer a new entry, unless the log is disabled.
    /// Concurrent prints append safely; a drain never overlaps an append.
    pub fn print(&self, args: fmt::Arguments<'_>) {
        let _guard = self.shared.gate.read();

        if !self.shared.enabled.load(Ordering::SeqCst) {
            return;
        }

        self.shared.append(args);
    }

    /// Drop subsequent entries. An in-flight print still completes.
    pub fn disable(&self) {
        self.shared.enabled.store(false, Ordering::SeqCst);
    }

    /// Resume accepting entries
    pub fn enable(&self) {
        self.shared.enabled.store(true, Ordering::SeqCst);
    }

    /// Interval between background flushes in seconds
    pub fn flush_interval_secs(&self) -> u32 {
        self.shared.flush_secs.load(Ordering::Relaxed)
    }

    /// Change the flush interval. Takes effect on the flush task's next
    /// wait cycle; an in-progress wait is never interrupted.
    pub fn set_flush_interval_secs(&self, secs: u32) -> Result<()> {
        if secs == 0 {
            return Err(Error::InvalidFlushInterval(secs));
        }

        self.shared.flush_secs.store(secs, Ordering::Relaxed);
        Ok(())
    }

    /// Disable the log, stop the flush task, drain remaining entries to
    /// disk, and release the backing file.
    ///
    /// Returns only after the flush task has terminated. A second call is
    /// a no-op.
    pub async fn close(&self) {
        let Some(task) = self.flush_task.lock().take() else {
            return;
        };

        {
            let _guard = self.shared.gate.write();

            self.shared.enabled.store(false, Ordering::SeqCst);

            // the marker bypasses the now-disabled public path
            self.shared
                .append(format_args!("{}", constants::CLOSE_MARKER));
        }

        // two-message rendezvous: signal the task, wait for its ack
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.shutdown_tx.send(ack_tx).await.is_ok() {
            let _ = ack_rx.await;
        }
        let _ = task.await;

        // the final drain covers everything appended after the task's
        // last cycle, including both markers
        self.shared.flush();

        if let Some(file) = self.shared.sink.lock().take() {
            if let Err(e) = file.close() {
                sink::durability_failure("close sync", e);
            }
        }

        debug!("Closed buffered log {}", self.name);
    }
}

/// Background flush loop: drains the buffer at the current interval until
/// the shutdown rendezvous arrives
async fn flush_loop(shared: Arc<Shared>, mut shutdown_rx: mpsc::Receiver<oneshot::Sender<()>>) {
    loop {
        // re-read so interval changes apply on the next wait cycle
        let secs = shared.flush_secs.load(Ordering::Relaxed);

        tokio::select! {
            ack = shutdown_rx.recv() => {
                shared.append(format_args!("{}", constants::SHUTDOWN_MARKER));
                if let Some(ack) = ack {
                    let _ = ack.send(());
                }
                break;
            }
            _ = tokio::time::sleep(Duration::from_secs(secs.into())) => {
                shared.flush();
            }
        }
    }
}
