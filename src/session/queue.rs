//! Workout queue builder.
//!
//! Expands an exercise plan into the ordered list of steps a session runs
//! through. Multi-set exercises are split into one step per set using a
//! two-pass layout: every exercise's first set in plan order, then all
//! remaining sets in plan order.

use serde::{Deserialize, Serialize};

use crate::plan::{ExerciseSpec, Section};

/// One step of a workout: a specific set of a specific exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStep {
    /// Exercise name.
    pub name: String,
    /// Repetitions for this set.
    pub reps: Option<u32>,
    /// Total number of sets for the exercise.
    pub total_sets: u32,
    /// Which set this step is, 1-based.
    pub current_set: u32,
    /// Countdown length in minutes for time-based steps.
    pub time_minutes: Option<u32>,
    /// Section the exercise belongs to.
    pub section: Section,
}

impl WorkoutStep {
    fn from_spec(spec: &ExerciseSpec, current_set: u32, total_sets: u32) -> Self {
        Self {
            name: spec.name.clone(),
            reps: spec.reps,
            total_sets,
            current_set,
            time_minutes: spec.time_minutes,
            section: spec.section,
        }
    }

    /// Whether this step runs a countdown.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.time_minutes.unwrap_or(0) > 0
    }

    /// Display title, including the set counter for multi-set exercises.
    #[must_use]
    pub fn title(&self) -> String {
        if self.total_sets > 1 {
            format!(
                "{} (Set {} of {})",
                self.name, self.current_set, self.total_sets
            )
        } else {
            self.name.clone()
        }
    }
}

/// Build the workout queue from a plan.
///
/// Exercises with no reps, sets, or time are dropped. An empty result means
/// there is nothing to run; the caller surfaces that as a validation
/// failure.
#[must_use]
pub fn build_queue(specs: &[ExerciseSpec]) -> Vec<WorkoutStep> {
    let mut queue = Vec::new();
    let mut remaining_sets = Vec::new();

    for spec in specs {
        if !spec.is_runnable() {
            continue;
        }

        let total_sets = spec.sets.filter(|s| *s > 1).unwrap_or(1);
        queue.push(WorkoutStep::from_spec(spec, 1, total_sets));

        for set in 2..=total_sets {
            remaining_sets.push(WorkoutStep::from_spec(spec, set, total_sets));
        }
    }

    queue.append(&mut remaining_sets);
    queue
}
