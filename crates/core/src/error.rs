//! Error types for the bag-of-words encoder.

use thiserror::Error;

/// Main error type for the encoder library.
///
/// Out-of-vocabulary tokens are never reported here; they are skipped.
#[derive(Error, Debug)]
pub enum EncoderError {
    /// A vocabulary mapped a token outside `[0, size)`
    #[error("Vocabulary maps token {token:?} to index {index}, outside a vocabulary of size {size}")]
    IndexOutOfRange {
        token: String,
        index: usize,
        size: usize,
    },

    /// Two tokens were given the same index
    #[error("Index {index} is assigned to both {first:?} and {second:?}")]
    DuplicateIndex {
        index: u32,
        first: String,
        second: String,
    },

    /// The same token was listed twice
    #[error("Token {0:?} is listed more than once")]
    DuplicateToken(String),

    /// No component is registered under the requested name
    #[error("Unknown component {name:?} (registered: {known})")]
    UnknownComponent { name: String, known: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, EncoderError>;
