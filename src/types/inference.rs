//! Request and response shapes exchanged with the inference endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown when the response shape is recognized but carries no
/// generated text.
pub const NO_RESPONSE_GENERATED: &str = "No response generated.";

/// Placeholder shown when the response shape is not recognized at all.
pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format.";

/// Payload posted to the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub inputs: String,
}

impl InferenceRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            inputs: prompt.into(),
        }
    }
}

/// A decoded response body, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResponse {
    /// A JSON array; text-generation models answer with one record per
    /// returned sequence.
    Sequence(Vec<Value>),
    /// A single JSON object.
    Record(Map<String, Value>),
    /// Any other JSON value (string, number, bool, null).
    Other(Value),
}

impl From<Value> for InferenceResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Sequence(items),
            Value::Object(fields) => Self::Record(fields),
            other => Self::Other(other),
        }
    }
}

/// Text extracted from a response, or the placeholder for why there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedText {
    Text(String),
    NoResponse,
    InvalidFormat,
}

impl GeneratedText {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::NoResponse => NO_RESPONSE_GENERATED,
            Self::InvalidFormat => INVALID_RESPONSE_FORMAT,
        }
    }

    /// Whether this is one of the placeholder strings.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl fmt::Display for GeneratedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GeneratedText> for String {
    fn from(text: GeneratedText) -> Self {
        match text {
            GeneratedText::Text(text) => text,
            other => other.as_str().to_string(),
        }
    }
}
