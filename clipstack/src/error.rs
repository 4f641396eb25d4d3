//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type for Clipstack
//!
//! Every fallible operation outside the history store returns
//! `Result<T, AppError>`. Store errors are folded in through
//! [`AppError::History`].

use std::{io, path::PathBuf};

use cliphist::HistoryError;
use thiserror::Error;

/// Unified error type for all clipstack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration value outside of what the program accepts. Fatal at startup.
    #[error("{field}: {message}")]
    InvalidConfiguration { field: String, message: String },

    /// Clipboard read returned nothing usable. Never surfaced to the user.
    #[error("Clipboard is empty or holds no text")]
    EmptyClipboard,

    /// Platform clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// History store error.
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create an invalid configuration error
    pub fn invalid_configuration<S1: Into<String>, S2: Into<String>>(
        field: S1,
        message: S2,
    ) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a clipboard error from any displayable platform error
    pub fn clipboard<E: std::fmt::Display>(err: E) -> Self {
        Self::Clipboard(err.to_string())
    }

    /// Errors that are swallowed without logging above trace level
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::EmptyClipboard)
    }

    /// Errors that must stop the program before the event loop starts
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. } | Self::History(HistoryError::InvalidCapacity { .. })
        )
    }
}
