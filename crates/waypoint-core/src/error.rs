//! Error types for the waypoint library.

use std::path::PathBuf;

use thiserror::Error;

use crate::assistant::AssistantError;

/// Comprehensive error type for all waypoint operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// Missing or malformed API credential; blocks any outbound call
    #[error("Invalid Gemini API key: {reason}")]
    InvalidCredential { reason: String },
    /// Failure talking to the language-model service
    #[error(transparent)]
    Transport(#[from] AssistantError),
    /// A request is already outstanding for this conversation
    #[error("The assistant is still working on the previous request")]
    Busy,
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found in plan {plan_id}")]
    TodoNotFound { plan_id: String, id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WaypointError {
        WaypointError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WaypointError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a credential validation error.
    pub fn invalid_credential(reason: impl Into<String>) -> Self {
        Self::InvalidCredential {
            reason: reason.into(),
        }
    }

    /// Whether this error came from the credential check rather than the
    /// network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCredential { .. })
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;
