//! mindcheck: a small mental state evaluation tool.
//!
//! Pick a model label, type a question, and the prompt is posted to a hosted
//! text-generation endpoint. The reply is normalized to a single string, or
//! to a placeholder when the response carries no text.
//!
//! # Quick Start
//!
//! ```no_run
//! use mindcheck::prelude::*;
//!
//! # async fn example() -> mindcheck::error::Result<()> {
//! let config = MindcheckConfig::load(None)?;
//! let client = InferenceClient::new(config.credential()?)
//!     .with_endpoint(config.endpoint_template()?);
//! let evaluator = Evaluator::new(client);
//! if let Some(outcome) = evaluator.submit(Some("bart 📖"), "How am I doing?").await {
//!     println!("{outcome}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod normalize;
pub mod prelude;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
