//! Terminal rendering for the form.

use std::io::{self, Write};

use crate::error::MindcheckError;
use crate::evaluation::Outcome;
use crate::models::ModelRegistry;

pub const TITLE: &str = "🧠 Mental State Evaluation Tool 🌿✨";
pub const CAPTION: &str =
    "Explore your mental well-being with the power of AI. 🌟 Let's begin the journey! 🛤️";
pub const PROMPT: &str = "Type your question here 💬:";

pub fn header(out: &mut impl Write, label: &str) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{CAPTION}")?;
    writeln!(out, "Model 🔍: {label}")?;
    writeln!(out)
}

pub fn model_list(out: &mut impl Write, registry: &ModelRegistry) -> io::Result<()> {
    for (label, model_id) in registry.entries() {
        writeln!(out, "{:<12} {label}\t{model_id}", label.short_name())?;
    }
    Ok(())
}

/// Write a reply to `out`, or an error message to `err`.
pub fn outcome(out: &mut impl Write, err: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Reply { label, text } => {
            writeln!(out, "### *{label} Response:* 🧑‍⚕️✨")?;
            writeln!(out, "{text}")
        }
        Outcome::Error(message) => writeln!(err, "{message}"),
    }
}

/// Map a startup error to a message with a hint.
pub fn format_error_help(err: &MindcheckError) -> String {
    match err {
        MindcheckError::MissingCredential { .. } => format!(
            "{err}. Get a token at https://huggingface.co/settings/tokens"
        ),
        MindcheckError::Toml(_) => format!("{err}. Expected:\n[huggingface]\napi_key = \"hf_...\""),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeneratedText;

    #[test]
    fn reply_goes_to_stdout_with_label_heading() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let reply = Outcome::Reply {
            label: "bart 📖".into(),
            text: GeneratedText::Text("breathe".into()),
        };
        outcome(&mut out, &mut err, &reply).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "### *bart 📖 Response:* 🧑‍⚕️✨\nbreathe\n");
        assert!(err.is_empty());
    }

    #[test]
    fn error_goes_to_stderr() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        outcome(&mut out, &mut err, &Outcome::Error("Error: 503 - busy".into())).unwrap();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "Error: 503 - busy\n");
    }

    #[test]
    fn model_list_shows_every_label() {
        let mut out = Vec::new();
        model_list(&mut out, &ModelRegistry).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("tiiuae/falcon-7b-instruct"));
        assert!(out.contains("gpt-neo 💡"));
    }

    #[test]
    fn missing_credential_help_points_at_tokens() {
        let err = MindcheckError::MissingCredential {
            hint: "HUGGINGFACE_API_KEY".into(),
        };
        assert!(format_error_help(&err).contains("huggingface.co/settings/tokens"));
    }
}
