//! Plan command: show the current exercise plan, reset it to defaults.

use crate::cli::args::OutputFormat;
use crate::error::RepflowError;
use crate::output::{format_plan, to_json};
use crate::plan::{default_plan, PlanStore, Section};

/// Show the plan the next session will run.
pub fn plan(section: Option<&str>, format: OutputFormat) -> Result<String, RepflowError> {
    let store = PlanStore::new()?;

    let (exercises, source) = store.load()?.map_or_else(
        || (default_plan(), "default".to_string()),
        |saved| {
            let source = saved.saved_at_local().map_or_else(
                || "saved".to_string(),
                |t| format!("saved {}", t.format("%Y-%m-%d %H:%M")),
            );
            (saved.exercises, source)
        },
    );

    let exercises = match section {
        Some(raw) => {
            let wanted = Section::parse(raw)
                .ok_or_else(|| RepflowError::Parse(format!("unknown section: {raw}")))?;
            exercises
                .into_iter()
                .filter(|s| s.section == wanted)
                .collect()
        }
        None => exercises,
    };

    format_plan(&exercises, &source, format)
}

/// Discard the saved plan, reverting to the built-in default.
pub fn reset(force: bool, format: OutputFormat) -> Result<String, RepflowError> {
    if !force {
        return Err(RepflowError::Config(
            "This will discard the saved plan.\nUse --force to confirm.".to_string(),
        ));
    }

    let store = PlanStore::new()?;
    store.clear()?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "reset": true })),
        OutputFormat::Pretty => {
            Ok("Saved plan discarded. The default plan is active.".to_string())
        }
    }
}
