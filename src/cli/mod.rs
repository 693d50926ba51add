//! CLI entry point for mindcheck.

pub mod form;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::ModelLabel;

/// Mental state evaluation tool
#[derive(Parser, Debug)]
#[command(name = "mindcheck", version, about = "🧠 Mental State Evaluation Tool 🌿✨")]
pub struct Cli {
    /// Secrets file with a [huggingface] api_key (defaults to the user config dir)
    #[arg(long, global = true)]
    pub secrets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available models
    Models,
    /// Ask one question
    Ask(AskArgs),
    /// Interactive form: one question per line until EOF
    Form(FormArgs),
}

/// Arguments for the `ask` subcommand.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Model label, or its short name (e.g. bart)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Question (positional)
    pub prompt: String,
}

/// Arguments for the `form` subcommand.
#[derive(Parser, Debug)]
pub struct FormArgs {
    /// Model label, or its short name (e.g. bart)
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Turn a `--model` value into the label the registry sees.
///
/// Short names expand to their full label; anything else passes through
/// unchanged and falls back to the default model when resolved.
pub fn select_label(model: Option<&str>) -> String {
    match model {
        None => ModelLabel::first().to_string(),
        Some(name) => ModelLabel::from_short_name(name)
            .map(|label| label.to_string())
            .unwrap_or_else(|| name.to_string()),
    }
}
