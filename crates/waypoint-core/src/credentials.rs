//! Gemini API key validation and storage.
//!
//! The key lives in a single file, `$XDG_CONFIG_HOME/waypoint/gemini-api-key`
//! by default. `GEMINI_API_KEY` in the environment takes precedence over the
//! file.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Result, WaypointError};

/// Every valid key starts with this literal.
pub const KEY_PREFIX: &str = "AIza";

/// Environment variable overriding the stored key.
pub const KEY_ENV_VAR: &str = "GEMINI_API_KEY";

const KEY_FILE_NAME: &str = "gemini-api-key";

/// A credential that passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates a raw key string.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidCredential` if the key is blank or does
    /// not start with [`KEY_PREFIX`].
    pub fn parse(raw: &str) -> Result<Self> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(WaypointError::invalid_credential("No API key configured."));
        }
        if !key.starts_with(KEY_PREFIX) {
            return Err(WaypointError::invalid_credential(format!(
                "API key must start with '{KEY_PREFIX}...'."
            )));
        }
        Ok(Self(key.to_string()))
    }

    /// The raw key, for placing on the wire.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Key with everything but the prefix and last four characters hidden.
    pub fn masked(&self) -> String {
        let tail: String = self
            .0
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{KEY_PREFIX}…{tail}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self.masked())
    }
}

/// File-backed slot holding one credential string.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
    use_env: bool,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_env: true,
        }
    }

    /// Ignores [`KEY_ENV_VAR`]; only the file counts.
    pub fn file_only(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Store at the XDG config location.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::XdgDirectory` if the config directory cannot be
    /// determined or created.
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `$XDG_CONFIG_HOME/waypoint/gemini-api-key`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_config_file(KEY_FILE_NAME)
            .map_err(|e| WaypointError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw stored value, without validation. `None` if nothing is stored.
    pub fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WaypointError::FileSystem {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Raw key from the environment, falling back to the file.
    pub fn resolve(&self) -> Result<Option<String>> {
        if self.use_env
            && let Ok(value) = std::env::var(KEY_ENV_VAR)
            && !value.trim().is_empty()
        {
            debug!("using API key from {KEY_ENV_VAR}");
            return Ok(Some(value.trim().to_string()));
        }
        self.load()
    }

    /// Validates and writes `raw`, replacing any stored key.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidCredential` without touching the file
    /// when the key is invalid, `WaypointError::FileSystem` on write failure.
    pub fn save(&self, raw: &str) -> Result<ApiKey> {
        let key = ApiKey::parse(raw)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WaypointError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(&self.path, format!("{}\n", key.expose())).map_err(|e| {
            WaypointError::FileSystem {
                path: self.path.clone(),
                source: e,
            }
        })?;
        debug!("saved API key to {}", self.path.display());
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_accepts_prefixed_key() {
        let key = ApiKey::parse("  AIzaSyExample1234 \n").unwrap();
        assert_eq!(key.expose(), "AIzaSyExample1234");
        assert_eq!(key.masked(), "AIza…1234");
        assert!(!format!("{key:?}").contains("SyExample"));
    }

    #[test]
    fn test_parse_rejects_blank_and_wrong_prefix() {
        assert!(ApiKey::parse("").unwrap_err().is_validation());
        let err = ApiKey::parse("sk-123").unwrap_err();
        assert!(err.to_string().contains("must start with 'AIza...'"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = KeyStore::new(dir.path().join("nested").join("key"));
        assert_eq!(store.load().unwrap(), None);

        store.save("AIzaSaved").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("AIzaSaved"));
    }

    #[test]
    fn test_file_only_resolves_from_file() {
        let dir = TempDir::new().unwrap();
        let store = KeyStore::new(dir.path().join("key")).file_only();
        assert_eq!(store.resolve().unwrap(), None);
        store.save("AIzaFromFile").unwrap();
        assert_eq!(store.resolve().unwrap().as_deref(), Some("AIzaFromFile"));
    }

    #[test]
    fn test_invalid_key_is_not_written() {
        let dir = TempDir::new().unwrap();
        let store = KeyStore::new(dir.path().join("key"));
        assert!(store.save("not-a-key").is_err());
        assert!(!store.path().exists());
    }
}
