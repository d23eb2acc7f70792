use thiserror::Error;

/// Result type alias for sigil operations
pub type Result<T> = std::result::Result<T, SigilError>;

/// Errors that can occur when serializing or delivering a fingerprint record
#[derive(Error, Debug)]
pub enum SigilError {
    /// Submission endpoint rejected the record
    #[error("submission rejected ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message extracted from the response
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid submission endpoint URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl SigilError {
    /// Returns true if the error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connection(_))
    }

    /// Returns the HTTP status code if the endpoint produced one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
