//! Builder for creating and configuring Session instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use super::Session;
use crate::{
    assistant::{Assistant, GeminiClient, GeminiConfig},
    credentials::KeyStore,
    error::{Result, WaypointError},
    ids::{RandomIds, SharedIds},
};

/// Builder for creating and configuring Session instances.
#[derive(Clone, Default)]
pub struct SessionBuilder {
    key_file: Option<PathBuf>,
    key_store: Option<KeyStore>,
    gemini: GeminiConfig,
    assistant: Option<Arc<dyn Assistant>>,
    ids: Option<SharedIds>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom key file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/waypoint/gemini-api-key` or
    /// `~/.config/waypoint/gemini-api-key`
    pub fn with_key_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.key_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a prepared key store, overriding [`Self::with_key_file`].
    pub fn with_key_store(mut self, store: KeyStore) -> Self {
        self.key_store = Some(store);
        self
    }

    pub fn with_model(mut self, model: Option<impl Into<String>>) -> Self {
        if let Some(model) = model {
            self.gemini.model = model.into();
        }
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.gemini.timeout = timeout;
        self
    }

    /// Replaces the Gemini client, typically with a test double.
    pub fn with_assistant(mut self, assistant: Arc<dyn Assistant>) -> Self {
        self.assistant = Some(assistant);
        self
    }

    /// Replaces the random id source.
    pub fn with_id_generator(mut self, ids: SharedIds) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Configuration` for a zero timeout
    /// Returns `WaypointError::XdgDirectory` if the default key path cannot
    /// be determined
    /// Returns `WaypointError::Transport` if the HTTP client cannot be created
    pub fn build(self) -> Result<Session> {
        if self.gemini.timeout.is_zero() {
            return Err(WaypointError::Configuration {
                message: "request timeout must be greater than zero".to_string(),
            });
        }

        let key_store = match (self.key_store, self.key_file) {
            (Some(store), _) => store,
            (None, Some(path)) => KeyStore::new(path),
            (None, None) => KeyStore::at_default_path()?,
        };

        let assistant: Arc<dyn Assistant> = match self.assistant {
            Some(assistant) => assistant,
            None => Arc::new(GeminiClient::new(self.gemini)?),
        };

        let ids = self.ids.unwrap_or_else(|| Arc::new(RandomIds));
        Ok(Session::new(assistant, key_store, ids))
    }
}
