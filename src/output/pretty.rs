//! Pretty (human-readable) output formatting for repflow.

use colored::Colorize;

use crate::plan::{ExerciseSpec, Section};

/// Format the exercise plan grouped by section.
#[must_use]
pub fn format_plan_pretty(plan: &[ExerciseSpec], source: &str) -> String {
    if plan.is_empty() {
        return "Exercise plan is empty.".to_string();
    }

    let mut output = format!(
        "{} ({}, {} exercises)\n",
        "Exercise Plan".bold(),
        source,
        plan.len()
    );

    for section in Section::ALL {
        let exercises: Vec<&ExerciseSpec> =
            plan.iter().filter(|s| s.section == section).collect();
        if exercises.is_empty() {
            continue;
        }

        output.push('\n');
        output.push_str(&section.display_name().cyan().bold().to_string());
        output.push('\n');
        output.push_str(&"─".repeat(44));
        output.push('\n');

        for spec in exercises {
            let reps = spec
                .reps
                .map_or_else(|| "--".to_string(), |r| r.to_string());
            let sets = spec
                .sets
                .map_or_else(|| "--".to_string(), |s| s.to_string());
            let time = spec
                .time_minutes
                .map_or_else(|| "--".to_string(), |t| format!("{t} min"));

            let line = format!(
                "  {:<24} {:>4} reps  {:>3} sets  {:>7}",
                spec.name, reps, sets, time
            );

            if spec.is_runnable() {
                output.push_str(&line);
            } else {
                output.push_str(&line.dimmed().to_string());
            }
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::default_plan;

    #[test]
    fn test_format_plan_pretty() {
        colored::control::set_override(false);
        let output = format_plan_pretty(&default_plan(), "default");

        assert!(output.contains("Exercise Plan"));
        assert!(output.contains("Warm Up"));
        assert!(output.contains("Jumping Jacks"));
        assert!(output.contains("20 reps"));
        assert!(output.contains("Cool Down"));
    }

    #[test]
    fn test_format_empty_plan() {
        assert_eq!(format_plan_pretty(&[], "saved"), "Exercise plan is empty.");
    }
}
