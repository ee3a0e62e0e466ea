//! Built-in default exercise plan.
//!
//! Used whenever no saved plan exists.

use super::{ExerciseSpec, Section};

/// Build the stock calisthenics plan.
#[must_use]
pub fn default_plan() -> Vec<ExerciseSpec> {
    vec![
        exercise("Jumping Jacks", Some(20), Some(2), None, Section::Warmup),
        exercise("Squats", None, None, None, Section::Warmup),
        exercise("Pushup", Some(12), Some(3), None, Section::Push),
        exercise("Australian Rows", Some(10), Some(2), None, Section::Pull),
        exercise("Pull ups", Some(8), Some(3), None, Section::Pull),
        exercise("Squats", Some(20), Some(3), None, Section::Legs),
        exercise("Plank", None, None, Some(1), Section::Core),
        exercise("Pull ups", Some(8), Some(3), None, Section::Core),
        exercise("Hamstring Stretches", None, None, None, Section::Cooldown),
    ]
}

fn exercise(
    name: &str,
    reps: Option<u32>,
    sets: Option<u32>,
    time_minutes: Option<u32>,
    section: Section,
) -> ExerciseSpec {
    ExerciseSpec {
        name: name.to_string(),
        reps,
        sets,
        time_minutes,
        section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_sections_in_order() {
        let plan = default_plan();
        assert_eq!(plan.len(), 9);

        // Sections appear in workout order
        let mut last = 0;
        for spec in &plan {
            let rank = Section::ALL
                .iter()
                .position(|s| *s == spec.section)
                .unwrap();
            assert!(rank >= last);
            last = rank;
        }
    }

    #[test]
    fn test_default_plan_has_runnable_exercises() {
        let plan = default_plan();
        assert!(plan.iter().any(ExerciseSpec::is_runnable));

        // Placeholder entries with no values survive in the plan
        assert!(plan.iter().any(|s| !s.is_runnable()));
    }
}
