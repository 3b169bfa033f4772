//! Language-model collaborator.
//!
//! The session talks to the model through the [`Assistant`] trait so tests
//! can substitute a scripted implementation. [`GeminiClient`] is the
//! production implementation.

use async_trait::async_trait;

mod error;
pub mod gemini;
pub mod types;

pub use error::AssistantError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use types::{Content, ContentRole, GenerateRequest, NO_RESPONSE, Part};

use crate::credentials::ApiKey;

/// Stateless text generation: every call carries the full context it needs.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Sends `request` and returns the reply text.
    ///
    /// A response without text yields [`NO_RESPONSE`] rather than an error.
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerateRequest,
    ) -> Result<String, AssistantError>;
}
