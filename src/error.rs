//! Domain error types for schedit.

use thiserror::Error;

/// Top-level error type for schedit
#[derive(Debug, Error)]
pub enum ScheditError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from date formatting and parsing.
///
/// Malformed display strings and unknown locales are reported in the status
/// line and the log instead of crashing the UI.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed date string '{input}': {source}")]
    Parse {
        input: String,
        source: chrono::ParseError,
    },

    #[error("unrecognized locale '{0}'")]
    UnknownLocale(String),
}

/// Result type alias for ScheditError
pub type Result<T> = std::result::Result<T, ScheditError>;
