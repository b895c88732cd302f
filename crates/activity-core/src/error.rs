//! Error Types

use thiserror::Error;

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Shown when a signup is submitted without an email or an activity
pub const MISSING_FIELDS: &str = "Please provide an email and select an activity.";

/// Reason given when the catalog endpoint answers with a non-2xx status
pub const LOAD_FAILED: &str = "Failed to load activities";

/// Fallback for signup failures that carry no message at all
pub const SIGNUP_FAILED: &str = "Signup failed";

/// Board error types
///
/// The `Display` output of every variant is the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Missing form input, reported before any network call
    #[error("{0}")]
    Validation(String),

    /// Transport failure (connection refused, aborted request, ...)
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx body that could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BoardError {
    /// Build the error for a rejected signup.
    ///
    /// The `detail` field of a JSON error body is surfaced verbatim; anything
    /// else falls back to a status-coded message.
    pub fn signup_rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::model::ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .filter(|detail| !detail.is_empty())
            .unwrap_or_else(|| format!("{SIGNUP_FAILED} ({status})"));
        Self::Server { status, message }
    }

    /// HTTP status, when the server produced this error
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for the status banner after a failed signup
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            SIGNUP_FAILED.into()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
