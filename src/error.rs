//! Unified error types for chatlens.
//!
//! The parser and the aggregator never fail on malformed transcripts: bad
//! timestamp lines are folded into the previous message and empty input
//! yields empty views. Errors only come from the edges of the crate:
//!
//! - reading or writing files ([`ChatlensError::Io`])
//! - input bytes that are not UTF-8 ([`ChatlensError::InvalidInput`])
//! - bad configuration values ([`ChatlensError::InvalidConfig`])
//! - output serialization ([`ChatlensError::Csv`], [`ChatlensError::Json`])

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript bytes could not be decoded.
    ///
    /// Transcripts must be UTF-8; anything else is rejected up front rather
    /// than parsed into garbage.
    #[error("Invalid input in {context}: {source}")]
    InvalidInput {
        /// Where the bytes came from
        context: String,
        /// The underlying decoding error
        #[source]
        source: std::str::Utf8Error,
    },

    /// A configuration value was rejected.
    #[error("Invalid value for {field}: {message}")]
    InvalidConfig {
        /// Name of the offending setting
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output bytes were not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid input error for undecodable transcript bytes.
    pub fn invalid_input(context: impl Into<String>, source: std::str::Utf8Error) -> Self {
        ChatlensError::InvalidInput {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input could not be decoded.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChatlensError::InvalidInput { .. })
    }

    /// Returns `true` if a configuration value was rejected.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatlensError::InvalidConfig { .. })
    }
}
