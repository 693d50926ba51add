//! Extraction of generated text from inference responses.

use serde_json::{Map, Value};
use tracing::warn;

use crate::types::{GeneratedText, InferenceResponse};

const GENERATED_TEXT_FIELD: &str = "generated_text";

/// Pull the generated text out of a response.
///
/// Arrays are read through their first element, objects directly. A
/// recognized shape without the field yields [`GeneratedText::NoResponse`];
/// any other shape yields [`GeneratedText::InvalidFormat`]. Never fails.
///
/// An empty array, or an array whose first element is not an object, counts
/// as a recognized shape without the field and yields
/// [`GeneratedText::NoResponse`] rather than surfacing as a submission
/// error.
pub fn normalize(body: &InferenceResponse) -> GeneratedText {
    let text = match body {
        InferenceResponse::Sequence(items) => match items.first() {
            Some(Value::Object(first)) => extract(first),
            _ => GeneratedText::NoResponse,
        },
        InferenceResponse::Record(fields) => extract(fields),
        InferenceResponse::Other(_) => GeneratedText::InvalidFormat,
    };

    if text.is_fallback() {
        warn!(placeholder = text.as_str(), "inference response carried no generated text");
    }
    text
}

fn extract(record: &Map<String, Value>) -> GeneratedText {
    match record.get(GENERATED_TEXT_FIELD) {
        Some(Value::String(text)) => GeneratedText::Text(text.clone()),
        Some(other) => GeneratedText::Text(other.to_string()),
        None => GeneratedText::NoResponse,
    }
}
