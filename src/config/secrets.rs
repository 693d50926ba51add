//! Credential handling and the TOML secrets file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Bearer token for the inference endpoint. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Access the raw token, for building the authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[redacted]")
    }
}

/// Contents of `secrets.toml`:
///
/// ```toml
/// [huggingface]
/// api_key = "hf_..."
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SecretsFile {
    #[serde(default)]
    pub huggingface: Option<HuggingFaceSecrets>,
}

#[derive(Deserialize)]
pub struct HuggingFaceSecrets {
    pub api_key: Option<String>,
}

impl fmt::Debug for HuggingFaceSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceSecrets")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .finish()
    }
}

impl SecretsFile {
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// The credential, if the file carries a non-empty one.
    pub fn credential(&self) -> Option<Credential> {
        self.huggingface
            .as_ref()
            .and_then(|hf| hf.api_key.as_deref())
            .filter(|key| !key.trim().is_empty())
            .map(Credential::new)
    }
}

/// Default secrets location, e.g. `~/.config/mindcheck/secrets.toml`.
pub fn default_secrets_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "mindcheck")
        .map(|dirs| dirs.config_dir().join("secrets.toml"))
}
