//! Convenience re-exports for common use.

pub use crate::config::{Credential, MindcheckConfig};
pub use crate::error::{MindcheckError, Result};
pub use crate::evaluation::{Evaluator, Outcome};
pub use crate::models::{ModelLabel, ModelRegistry};
pub use crate::normalize::normalize;
pub use crate::provider::{InferenceClient, InferenceTransport};
pub use crate::types::{GeneratedText, InferenceResponse};
