//! Label to identifier resolution.

use std::str::FromStr;

use tracing::debug;

use super::ModelLabel;

/// Identifier used when a label is not one of [`ModelLabel`].
pub const DEFAULT_MODEL_ID: &str = "meta-llama/Llama-3.2-1B-Instruct";

/// Resolves form selections to remote model identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelRegistry;

impl ModelRegistry {
    /// Resolve a raw selection. Never fails: anything that is not a known
    /// label, including no selection, maps to [`DEFAULT_MODEL_ID`].
    pub fn resolve(&self, label: Option<&str>) -> &'static str {
        match label.map(ModelLabel::from_str) {
            Some(Ok(known)) => known.model_id(),
            Some(Err(_)) => {
                debug!(label = label.unwrap_or_default(), "unknown model label, using default");
                DEFAULT_MODEL_ID
            }
            None => DEFAULT_MODEL_ID,
        }
    }

    /// Resolve a typed label.
    pub fn resolve_label(&self, label: ModelLabel) -> &'static str {
        label.model_id()
    }

    /// Labels paired with their identifiers, in display order.
    pub fn entries(&self) -> Vec<(ModelLabel, &'static str)> {
        ModelLabel::all()
            .into_iter()
            .map(|label| (label, label.model_id()))
            .collect()
    }
}
