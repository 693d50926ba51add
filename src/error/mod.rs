//! Error types for mindcheck.

use strum::Display;
use thiserror::Error;

/// Primary error type for all mindcheck operations.
#[derive(Error, Debug)]
pub enum MindcheckError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing credential: set {hint}")]
    MissingCredential { hint: String },

    /// The inference endpoint answered with a non-success status.
    #[error("{status} - {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {}", error_chain(.0))]
    Network(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Secrets file error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Coarse classification used for logging and user-facing formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Api,
    Authentication,
    Server,
    Network,
    Timeout,
    Configuration,
    Serialization,
    Unknown,
}

impl MindcheckError {
    /// Create an API error from a status code and the raw response body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::Network(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) | Self::MissingCredential { .. } | Self::Toml(_) => {
                ErrorCategory::Configuration
            }
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error came from the transport: a non-success status or a
    /// failure to reach the endpoint at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Network(_) | Self::Timeout(_))
    }
}

/// Render `err` followed by each of its sources, `: `-separated.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !rendered.ends_with(&cause_text) {
            rendered.push_str(": ");
            rendered.push_str(&cause_text);
        }
        source = cause.source();
    }
    rendered
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MindcheckError>;
