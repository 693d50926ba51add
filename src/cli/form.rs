//! Command handlers driving the evaluator from the terminal.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::evaluation::{Evaluator, Outcome};
use crate::models::ModelRegistry;

use super::render;

/// Tally of a form session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSummary {
    pub submitted: usize,
    pub failed: usize,
}

pub fn handle_models(out: &mut impl Write) -> Result<()> {
    render::model_list(out, &ModelRegistry)?;
    Ok(())
}

/// Run a single submission. Returns the outcome, or `None` for an empty
/// prompt.
pub async fn handle_ask(
    evaluator: &Evaluator,
    label: &str,
    prompt: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Option<Outcome>> {
    let outcome = evaluator.submit(Some(label), prompt).await;
    if let Some(ref outcome) = outcome {
        render::outcome(out, err, outcome)?;
    }
    Ok(outcome)
}

/// Read questions from `input`, one per line, until EOF.
///
/// Empty lines are skipped. A failed submission is reported and the loop
/// continues.
pub async fn run_form(
    evaluator: &Evaluator,
    label: &str,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<FormSummary> {
    let mut summary = FormSummary::default();
    render::header(out, label)?;

    let mut lines = input.lines();
    loop {
        writeln!(out, "{}", render::PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let prompt = line.trim_end_matches('\r');

        if let Some(outcome) = evaluator.submit(Some(label), prompt).await {
            summary.submitted += 1;
            if outcome.is_error() {
                summary.failed += 1;
            }
            render::outcome(out, err, &outcome)?;
            writeln!(out)?;
        }
    }

    Ok(summary)
}
