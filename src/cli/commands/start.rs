//! Start command: build the workout queue and run the player.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::RepflowError;
use crate::output::to_json;
use crate::plan::{default_plan, PlanStore};
use crate::session::build_queue;
use crate::tui;

/// Start a workout session.
///
/// Loads the plan (saved if present, default otherwise), builds the queue,
/// persists the confirmed plan, and hands the queue to the player.
pub fn start(format: OutputFormat) -> Result<String, RepflowError> {
    let config = Config::load()?;
    let store = PlanStore::new()?;

    let plan = store
        .load()?
        .map_or_else(default_plan, |saved| saved.exercises);

    let queue = build_queue(&plan);
    if queue.is_empty() {
        return Err(RepflowError::EmptyQueue);
    }

    // The plan is confirmed runnable; save it before the session starts.
    store.save(&plan)?;

    let outcome = tui::run(queue, &config)?;

    match format {
        OutputFormat::Json => to_json(&outcome),
        OutputFormat::Pretty => {
            if outcome.completed {
                Ok(format!(
                    "{}\n   {} steps done. See you next time!",
                    "🎉 Congratulations! You completed your workout! 💪"
                        .green()
                        .bold(),
                    outcome.steps_total
                ))
            } else {
                Ok("Workout exited early. The plan is saved for next time."
                    .dimmed()
                    .to_string())
            }
        }
    }
}
