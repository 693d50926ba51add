//! mindcheck CLI binary entry point.

use std::io;

use clap::Parser;
use mindcheck::cli::{form, render, select_label, Cli, Commands};
use mindcheck::config::MindcheckConfig;
use mindcheck::error::Result;
use mindcheck::evaluation::Evaluator;
use mindcheck::provider::InferenceClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = run(cli).await;
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", render::format_error_help(&e));
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MINDCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns whether every submission succeeded.
async fn run(cli: Cli) -> Result<bool> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    match cli.command {
        Commands::Models => {
            form::handle_models(&mut stdout)?;
            Ok(true)
        }
        Commands::Ask(args) => {
            let evaluator = build_evaluator(cli.secrets.as_deref())?;
            let label = select_label(args.model.as_deref());
            let outcome =
                form::handle_ask(&evaluator, &label, &args.prompt, &mut stdout, &mut stderr)
                    .await?;
            Ok(!outcome.is_some_and(|o| o.is_error()))
        }
        Commands::Form(args) => {
            let evaluator = build_evaluator(cli.secrets.as_deref())?;
            let label = select_label(args.model.as_deref());
            let stdin = io::stdin().lock();
            let summary =
                form::run_form(&evaluator, &label, stdin, &mut stdout, &mut stderr).await?;
            Ok(summary.failed == 0)
        }
    }
}

fn build_evaluator(secrets: Option<&std::path::Path>) -> Result<Evaluator> {
    let config = MindcheckConfig::load(secrets)?;
    let client = InferenceClient::new(config.credential()?)
        .with_endpoint(config.endpoint_template()?);
    Ok(Evaluator::new(client))
}

