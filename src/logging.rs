//! Tracing setup for hosts embedding the grid.
//!
//! Events go to a daily rolling file under the chosen directory through a
//! non-blocking writer. The default filter is `masonry_grid=info`; `RUST_LOG`
//! overrides it.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "masonry_grid.log";
const DEFAULT_FILTER: &str = "masonry_grid=info";

/// Keeps the background writer alive. Dropping it flushes buffered lines.
pub struct LoggingGuard {
    _worker: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Installs the global subscriber. Returns `None` if the directory cannot be
/// created or a subscriber is already installed.
pub fn init(log_dir: &Path) -> Option<LoggingGuard> {
    std::fs::create_dir_all(log_dir).ok()?;

    let (writer, worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .ok()?;

    tracing::info!(log_dir = %log_dir.display(), "grid logging initialized");

    Some(LoggingGuard {
        _worker: worker,
        log_dir: log_dir.to_path_buf(),
    })
}
