//! Model labels offered by the form and their remote identifiers.

pub mod registry;

pub use registry::{ModelRegistry, DEFAULT_MODEL_ID};

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// User-facing model choices, in the order the form lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum ModelLabel {
    #[strum(serialize = "distilgpt2 🧩")]
    DistilGpt2,
    #[strum(serialize = "bart 📖")]
    Bart,
    #[strum(serialize = "gpt-neo 💡")]
    GptNeo,
    #[strum(serialize = "flan-t5 🌟")]
    FlanT5,
}

impl ModelLabel {
    /// Get the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DistilGpt2 => "distilgpt2 🧩",
            Self::Bart => "bart 📖",
            Self::GptNeo => "gpt-neo 💡",
            Self::FlanT5 => "flan-t5 🌟",
        }
    }

    /// The label without its decoration, e.g. `bart`.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::DistilGpt2 => "distilgpt2",
            Self::Bart => "bart",
            Self::GptNeo => "gpt-neo",
            Self::FlanT5 => "flan-t5",
        }
    }

    /// Remote model identifier served for this label.
    ///
    /// `Bart` and `GptNeo` share a target.
    pub fn model_id(&self) -> &'static str {
        match self {
            Self::DistilGpt2 => "meta-llama/Llama-3.2-1B-Instruct",
            Self::Bart => "google/gemma-1.1-2b-it",
            Self::FlanT5 => "tiiuae/falcon-7b-instruct",
            Self::GptNeo => "google/gemma-1.1-2b-it",
        }
    }

    /// All labels in display order.
    pub fn all() -> Vec<ModelLabel> {
        Self::iter().collect()
    }

    /// The label preselected by the form.
    pub fn first() -> ModelLabel {
        Self::DistilGpt2
    }

    /// Look a label up by its short name.
    pub fn from_short_name(name: &str) -> Option<ModelLabel> {
        Self::iter().find(|label| label.short_name() == name)
    }
}
