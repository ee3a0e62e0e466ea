//! Output formatting for repflow.
//!
//! Formatters for displaying the exercise plan and session results.

mod json;
mod pretty;

pub use json::{format_plan_json, to_json};
pub use pretty::format_plan_pretty;

use crate::cli::args::OutputFormat;
use crate::error::RepflowError;
use crate::plan::ExerciseSpec;

/// Format a plan based on output format.
///
/// # Errors
///
/// Returns `RepflowError::Json` if JSON serialization fails.
pub fn format_plan(
    plan: &[ExerciseSpec],
    source: &str,
    format: OutputFormat,
) -> Result<String, RepflowError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(plan, source)),
        OutputFormat::Json => format_plan_json(plan, source),
    }
}
