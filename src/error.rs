//! Error types for livepoll
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::SessionStoreError;

/// Result type alias for livepoll operations
pub type LivepollResult<T> = Result<T, LivepollError>;

/// Main error type for livepoll operations
#[derive(Error, Debug)]
pub enum LivepollError {
    /// Watch root does not exist
    #[error("watch root not found: {path}")]
    WatchRootNotFound { path: PathBuf },

    /// Watch root exists but is a file (or something else)
    #[error("watch root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Session persistence failed
    #[error("session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_root_not_found() {
        let err = LivepollError::WatchRootNotFound {
            path: PathBuf::from("/site"),
        };
        assert_eq!(err.to_string(), "watch root not found: /site");
    }

    #[test]
    fn test_error_display_config() {
        let err = LivepollError::Config {
            file: PathBuf::from("livepoll.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in livepoll.toml: expected a table"
        );
    }
}
