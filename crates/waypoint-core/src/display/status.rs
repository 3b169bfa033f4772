//! User-visible notices reporting the outcome of a conversation turn.

use std::fmt;

use serde::Serialize;

use crate::error::WaypointError;

/// A short success or failure message with an optional detail line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub success: bool,
}

impl Notice {
    /// Create a new success notice.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            success: true,
        }
    }

    /// Create a new failure notice.
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            success: false,
        }
    }

    /// Failure notice for an error raised while contacting the assistant.
    ///
    /// Credential problems get the key prompt; everything else carries the
    /// underlying message.
    pub fn from_error(title: impl Into<String>, err: &WaypointError) -> Self {
        match err {
            WaypointError::InvalidCredential { reason } => Self::failure(
                "Gemini API key required",
                format!("{reason} Set one with `wp key set <KEY>` or GEMINI_API_KEY."),
            ),
            other => Self::failure(title, other.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.title
        )?;
        if let Some(desc) = &self.description {
            write!(f, ": {desc}")?;
        }
        writeln!(f)
    }
}
