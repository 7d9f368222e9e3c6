//! Log construction and rotation

use crate::buffered::BufferedLog;
use crate::direct::DirectLog;
use crate::handle::{FileLog, LogKind};
use crate::sink::{self, FileSink};
use chrono::Local;
use filelog_core::{constants, Error, LogConfig, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Create a log with default configuration.
///
/// See [`create_with`].
pub fn create(name: &str, base_dir: impl AsRef<Path>, kind: LogKind) -> Result<FileLog> {
    create_with(name, base_dir, kind, LogConfig::default())
}

/// Create a log, opening (or creating) `<base_dir>/<name>.log` for append.
///
/// The directory is created if missing. An open failure surfaces as an
/// error rather than a crash. Must be called from within a tokio runtime
/// when `kind` is [`LogKind::Buffered`] (the flush task is spawned at
/// construction).
pub fn create_with(
    name: &str,
    base_dir: impl AsRef<Path>,
    kind: LogKind,
    config: LogConfig,
) -> Result<FileLog> {
    let base_dir = base_dir.as_ref();
    config.validate()?;

    ensure_dir(base_dir)?;

    let path = constants::log_file_path(base_dir, name);
    let file = FileSink::open(&path).map_err(|e| {
        warn!("Failed to open log file {}: {}", path.display(), e);
        Error::OpenFailed(path.clone())
    })?;

    debug!("Opened log file {} ({:?})", path.display(), kind);

    let log = match kind {
        LogKind::Buffered => FileLog::Buffered(BufferedLog::new(
            base_dir.to_path_buf(),
            name.to_string(),
            config,
            file,
        )),
        LogKind::Direct => FileLog::Direct(DirectLog::new(
            base_dir.to_path_buf(),
            name.to_string(),
            config,
            file,
        )),
    };

    log.print(format_args!("{}", constants::INIT_MARKER));

    Ok(log)
}

/// Close a log, archive its backing file under `old/` with a date stamp,
/// and return a fresh log of the same kind and name at the original
/// location.
///
/// A buffered log's current flush interval carries over to the new
/// handle. The old handle is consumed and never reused.
pub async fn rotate(log: FileLog) -> Result<FileLog> {
    let name = log.name().to_string();
    let base_dir = log.base_dir().to_path_buf();
    let kind = log.kind();

    let config = match &log {
        FileLog::Buffered(buffered) => {
            let mut config = buffered.config().clone();
            config.flush_interval_secs = buffered.flush_interval_secs();
            config
        }
        FileLog::Direct(direct) => direct.config().clone(),
    };

    log.close().await;

    ensure_dir(&constants::archive_dir(&base_dir))?;

    let stamp = Local::now().format("%Y%m%d").to_string();
    let current = constants::log_file_path(&base_dir, &name);
    let archived = constants::archive_file_path(&base_dir, &stamp, &name);

    // a failed rename leaves the file neither archived nor continued;
    // abort rather than tolerate the ambiguity
    if let Err(e) = fs::rename(&current, &archived) {
        sink::durability_failure("rotate rename", e);
    }

    info!(
        "Rotated log file {} to {}",
        current.display(),
        archived.display()
    );

    create_with(&name, &base_dir, kind, config)
}

/// Create a directory (and parents) with the log directory mode
fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(constants::LOG_DIR_MODE);
    }

    builder.create(path)?;
    Ok(())
}
