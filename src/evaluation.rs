//! One form submission: resolve the label, call the endpoint, normalize the
//! reply, and fold every failure into a renderable message.

use std::fmt;

use tracing::warn;

use crate::error::MindcheckError;
use crate::models::ModelRegistry;
use crate::normalize::normalize;
use crate::provider::InferenceClient;
use crate::types::GeneratedText;

/// What the form shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply { label: String, text: GeneratedText },
    Error(String),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reply { text, .. } => write!(f, "{text}"),
            Self::Error(message) => f.write_str(message),
        }
    }
}

/// Render an error the way the form displays it.
///
/// Status failures show the code and raw body; everything else gets the
/// generic wrapper.
pub fn format_error(err: &MindcheckError) -> String {
    match err {
        MindcheckError::Api { status, body } => format!("Error: {status} - {body}"),
        other => format!("⚠️ An error occurred: {other} 😔"),
    }
}

/// Runs submissions against one client.
#[derive(Debug, Clone)]
pub struct Evaluator {
    client: InferenceClient,
    registry: ModelRegistry,
}

impl Evaluator {
    pub fn new(client: InferenceClient) -> Self {
        Self {
            client,
            registry: ModelRegistry,
        }
    }

    /// Evaluate `prompt` with the model selected by `label`.
    ///
    /// Returns `None` without touching the network when `prompt` is empty.
    /// Never returns an error: failures become [`Outcome::Error`].
    pub async fn submit(&self, label: Option<&str>, prompt: &str) -> Option<Outcome> {
        if prompt.is_empty() {
            return None;
        }

        let model_id = self.registry.resolve(label);
        let outcome = match self.client.infer(model_id, prompt).await {
            Ok(body) => Outcome::Reply {
                label: label.unwrap_or_default().to_string(),
                text: normalize(&body),
            },
            Err(err) => {
                warn!(
                    model = model_id,
                    category = %err.category(),
                    transport = err.is_transport(),
                    "submission failed"
                );
                Outcome::Error(format_error(&err))
            }
        };
        Some(outcome)
    }
}
