//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Fallback reply when the response carries no text.
pub const NO_RESPONSE: &str = "No response from Gemini.";

/// Role vocabulary of the service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    User,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

/// One turn of the request: a role and its text parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    pub role: ContentRole,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: ContentRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts.
    pub fn joined_text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Request body: the instruction block followed by the transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate's first part, if present and non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }

    /// [`Self::first_text`] or [`NO_RESPONSE`].
    pub fn into_reply(self) -> String {
        self.first_text().unwrap_or(NO_RESPONSE).to_string()
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Server-provided message from a raw error body, or `Unknown error`.
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = GenerateRequest {
            contents: vec![Content::text(ContentRole::Model, "hi")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"role": "model", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_first_candidate_text_is_extracted() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"1. Book a flight"},{"text":"ignored"}],"role":"model"}},{"content":{"parts":[{"text":"second"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_reply(), "1. Book a flight");
    }

    #[test]
    fn test_missing_path_falls_back() {
        for body in [r#"{}"#, r#"{"candidates":[]}"#, r#"{"candidates":[{}]}"#, r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#] {
            let response: GenerateResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.into_reply(), NO_RESPONSE, "body: {body}");
        }
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            ErrorBody::message_from(r#"{"error":{"code":400,"message":"API key not valid."}}"#),
            "API key not valid."
        );
        assert_eq!(ErrorBody::message_from("<html>502</html>"), "Unknown error");
        assert_eq!(ErrorBody::message_from(r#"{"error":{}}"#), "Unknown error");
    }
}
