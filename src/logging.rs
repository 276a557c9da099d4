//! Tracing setup.
//!
//! Logging is off unless a log file is configured: the TUI owns stdout,
//! so output must never go to the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that can occur while enabling file logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log file '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a file-backed subscriber. `RUST_LOG` overrides the default
/// `book_review=info` filter.
pub fn init_tracing(path: &Path) -> Result<(), LoggingError> {
    let file = File::create(path).map_err(|e| LoggingError::CreateFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("book_review=info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
