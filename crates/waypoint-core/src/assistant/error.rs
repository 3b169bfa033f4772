//! Assistant transport error types

use thiserror::Error;

/// Errors that can occur while talking to the language-model service.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The service answered with a non-success status
    #[error("Gemini API error: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssistantError {
    /// HTTP status reported by the service, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            AssistantError::Api { status, .. } => Some(*status),
            AssistantError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
