//! One-shot calculation for the `calc` command.

use crate::calculator::{EvalError, evaluate};
use anyhow::{Context, Result};
use std::io::Write;

/// How a one-shot calculation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcStatus {
    /// The expression was written to the output.
    Printed,
    /// Input was rejected; the message went to the error stream.
    Rejected,
}

/// Evaluate one operation and write the expression, or its JSON, to `out`.
///
/// Validation failures are written to `err` and reported as
/// [`CalcStatus::Rejected`]. A fatal error is returned instead.
pub fn run_calc<W: Write, E: Write>(
    left: &str,
    operator: &str,
    right: &str,
    json: bool,
    out: &mut W,
    err: &mut E,
) -> Result<CalcStatus> {
    match evaluate(left, right, operator) {
        Ok(expression) if json => {
            writeln!(out, "{}", serde_json::to_string(&expression)?)?;
        }
        Ok(expression) => writeln!(out, "{expression}")?,
        Err(EvalError::Validation(rejected)) => {
            writeln!(err, "{rejected}")?;
            return Ok(CalcStatus::Rejected);
        }
        Err(fatal @ EvalError::Fatal(_)) => {
            return Err(fatal).context("Calculation aborted");
        }
    }

    Ok(CalcStatus::Printed)
}
