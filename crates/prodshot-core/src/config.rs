use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROMPT};
use crate::error::{ProdshotError, Result};

/// User-tunable settings. Every field falls back to its default when absent
/// from the TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gemini model identifier, e.g. `gemini-2.5-flash-image-preview`.
    pub model: String,
    /// Base URL of the REST API, without the `/models/...` suffix.
    pub endpoint: String,
    /// Prompt pre-filled in the editor and restored on start over.
    pub default_prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            endpoint: DEFAULT_ENDPOINT.into(),
            default_prompt: DEFAULT_PROMPT.into(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// The single process-level API key.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `API_KEY`. A missing or blank key is fatal.
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(ProdshotError::MissingCredential { env: API_KEY_ENV }),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
