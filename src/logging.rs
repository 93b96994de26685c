//! File logging setup
//!
//! The TUI owns stdout and stderr while it runs, so tracing output only ever
//! goes to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{PagetabsError, Result};

/// Install a `fmt` subscriber appending to `log_file`
///
/// Without a file no subscriber is installed and `false` is returned.
/// The filter comes from `RUST_LOG`, defaulting to `debug`.
pub fn init(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| PagetabsError::log(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
