//! Error types for board operations.

use thiserror::Error;

/// Errors from talking to the activities API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("API rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Participant has no email on record")]
    MissingEmail,
}

impl BoardError {
    /// Server-provided detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BoardError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::Decode(err.to_string())
    }
}

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
