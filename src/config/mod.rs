//! Configuration system (layered: code > env > secrets file).

pub mod secrets;

pub use secrets::{default_secrets_path, Credential, SecretsFile};

use std::path::Path;

use tracing::debug;

use crate::error::{MindcheckError, Result};
use crate::provider::hugging_face::{EndpointTemplate, DEFAULT_ENDPOINT};

/// Environment variables checked for the credential, first match wins.
pub const CREDENTIAL_ENV_VARS: [&str; 2] = ["HUGGINGFACE_API_KEY", "HF_TOKEN"];

/// Environment variable overriding the endpoint template.
pub const ENDPOINT_ENV_VAR: &str = "MINDCHECK_ENDPOINT";

/// Resolved configuration for one process.
///
/// Resolution order for each value:
/// 1. Explicit setters
/// 2. Environment variables (after loading `.env`)
/// 3. The `[huggingface]` table of the secrets file (credential only)
#[derive(Debug, Clone, Default)]
pub struct MindcheckConfig {
    credential: Option<Credential>,
    endpoint: Option<String>,
}

impl MindcheckConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables only.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        config.credential = CREDENTIAL_ENV_VARS.iter().find_map(|var| {
            std::env::var(var)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(|value| {
                    debug!(source = *var, "credential loaded from environment");
                    Credential::new(value)
                })
        });
        config.endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();

        config
    }

    /// Load environment, then fill a missing credential from the secrets file.
    ///
    /// An explicit `secrets_path` must exist; the default location is
    /// optional.
    pub fn load(secrets_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::from_env();
        if config.credential.is_some() {
            return Ok(config);
        }

        let secrets = match secrets_path {
            Some(path) => Some(SecretsFile::load(path)?),
            None => match default_secrets_path() {
                Some(path) if path.is_file() => Some(SecretsFile::load(&path)?),
                _ => None,
            },
        };
        if let Some(secrets) = secrets {
            config.merge_secrets(&secrets);
        }
        Ok(config)
    }

    /// Take the credential from `secrets` unless one is already set.
    pub fn merge_secrets(&mut self, secrets: &SecretsFile) {
        if self.credential.is_none() {
            if let Some(credential) = secrets.credential() {
                debug!("credential loaded from secrets file");
                self.credential = Some(credential);
            }
        }
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn set_endpoint(&mut self, template: impl Into<String>) {
        self.endpoint = Some(template.into());
    }

    /// The credential, or a [`MindcheckError::MissingCredential`] naming where
    /// to put one.
    pub fn credential(&self) -> Result<Credential> {
        self.credential
            .clone()
            .ok_or_else(|| MindcheckError::MissingCredential {
                hint: format!(
                    "{} or an api_key under [huggingface] in secrets.toml",
                    CREDENTIAL_ENV_VARS[0]
                ),
            })
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// The endpoint template, validated.
    pub fn endpoint_template(&self) -> Result<EndpointTemplate> {
        EndpointTemplate::parse(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }
}
