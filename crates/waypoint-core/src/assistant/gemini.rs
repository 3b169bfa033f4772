//! Gemini `generateContent` client.
//!
//! One request per call, no retries: a failed call surfaces the server's
//! error message and the user decides whether to try again.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use super::{
    Assistant, AssistantError,
    types::{ErrorBody, GenerateRequest, GenerateResponse},
};
use crate::credentials::ApiKey;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Full endpoint URL, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns `AssistantError::Network` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, AssistantError> {
        debug!("GeminiClient::new: model {}", config.model);
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AssistantError::Network)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl Assistant for GeminiClient {
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerateRequest,
    ) -> Result<String, AssistantError> {
        debug!(
            "generate: sending {} content blocks to {}",
            request.contents.len(),
            self.config.model
        );

        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", api_key.expose())])
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = ErrorBody::message_from(&body);
            warn!("generate: API error {}: {message}", status.as_u16());
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        debug!("generate: success");
        Ok(parsed.into_reply())
    }
}
