//! Logging setup.
//!
//! The terminal belongs to the UI, so the tracing subscriber writes only to
//! a log file in the platform data directory
//! (e.g. `~/.local/share/interview-deck/interview-deck.log`). The level is
//! taken from `RUST_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

pub const LOG_FILE_NAME: &str = "interview-deck.log";

/// Writer guard and the file the installed subscriber writes to.
static LOG_STATE: OnceLock<(WorkerGuard, PathBuf)> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("No suitable data directory available for logs")]
    NoDataDir,
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber writing to the default log location.
///
/// Subsequent calls are no-ops. Callers are expected to carry on without
/// logging when this fails.
pub fn init() -> Result<PathBuf, LoggingError> {
    let dirs = directories::ProjectDirs::from("", "", "interview-deck")
        .ok_or(LoggingError::NoDataDir)?;
    init_in(dirs.data_dir())
}

/// Install the global subscriber writing to `dir/interview-deck.log`.
///
/// Once a subscriber is installed, every later call returns the path of the
/// file actually being written, whatever `dir` it is given.
pub fn init_in(dir: &Path) -> Result<PathBuf, LoggingError> {
    if let Some((_, active)) = LOG_STATE.get() {
        return Ok(active.clone());
    }

    let path = dir.join(LOG_FILE_NAME);
    fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.clone(),
            source,
        })?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let file_layer = fmt::layer().with_ansi(false).with_writer(writer);
    let subscriber = Registry::default().with(build_env_filter()).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_STATE.set((guard, path.clone()));

    tracing::info!("Logging initialized; log file at {}", path.display());
    Ok(path)
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
