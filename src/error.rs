//! Unified error types for pagetabs
//!
//! Page operations never fail; these errors only come from the host
//! around them (config files, the log file, the terminal).

use std::path::PathBuf;

/// Unified error type for pagetabs
#[derive(Debug, thiserror::Error)]
pub enum PagetabsError {
    /// I/O errors (terminal, log file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Config error: {path} - {reason}")]
    Config { path: PathBuf, reason: String },

    /// Logging setup errors
    #[error("Log error: {0}")]
    Log(String),
}

/// Convenience Result type using PagetabsError
pub type Result<T> = std::result::Result<T, PagetabsError>;

impl PagetabsError {
    /// Create a Config error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Log error
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }
}
