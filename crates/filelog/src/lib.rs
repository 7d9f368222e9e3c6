//! Filelog - file-backed loggers with buffered and direct writer strategies
//!
//! A [`FileLog`] is created by [`create`] in one of two kinds: a
//! [`BufferedLog`] accumulates entries in memory and flushes them to disk
//! from a background task at a configurable interval, while a [`DirectLog`]
//! writes every entry to disk synchronously. [`rotate`] archives a log's
//! backing file under an `old/` subdirectory and returns a fresh handle at
//! the original location.

mod buffered;
mod direct;
mod factory;
mod format;
mod handle;
mod sink;

pub use buffered::BufferedLog;
pub use direct::DirectLog;
pub use factory::{create, create_with, rotate};
pub use format::LineFormatter;
pub use handle::{FileLog, LogKind};

pub use filelog_core::{constants, Error, LogConfig, Result};
