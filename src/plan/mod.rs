//! Exercise plan types.
//!
//! A plan is an ordered list of exercise specifications grouped into the
//! standard calisthenics sections. The plan is the input to the queue
//! builder; it is never mutated by a running session.

mod defaults;
mod store;

pub use defaults::default_plan;
pub use store::{PlanStore, SavedPlan};

use serde::{Deserialize, Serialize};

/// Workout section an exercise belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Warm-up exercises.
    Warmup,
    /// Push movements (pushups, dips).
    Push,
    /// Pull movements (rows, pull ups).
    Pull,
    /// Leg work.
    Legs,
    /// Core work.
    Core,
    /// Cool-down stretches.
    Cooldown,
}

impl Section {
    /// All sections in workout order.
    pub const ALL: [Self; 6] = [
        Self::Warmup,
        Self::Push,
        Self::Pull,
        Self::Legs,
        Self::Core,
        Self::Cooldown,
    ];

    /// Parse a section from user input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "warmup" | "warm-up" => Some(Self::Warmup),
            "push" => Some(Self::Push),
            "pull" => Some(Self::Pull),
            "legs" => Some(Self::Legs),
            "core" => Some(Self::Core),
            "cooldown" | "cool-down" => Some(Self::Cooldown),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Warmup => "Warm Up",
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::Core => "Core",
            Self::Cooldown => "Cool Down",
        }
    }

    /// Stable identifier used for storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Legs => "legs",
            Self::Core => "core",
            Self::Cooldown => "cooldown",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One exercise in the plan.
///
/// Any of reps, sets, and time may be left unset; an exercise with none of
/// them set is kept in the plan for display but is skipped when the workout
/// queue is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSpec {
    /// Exercise name.
    pub name: String,
    /// Repetitions per set.
    pub reps: Option<u32>,
    /// Number of sets.
    pub sets: Option<u32>,
    /// Duration in minutes for time-based exercises.
    pub time_minutes: Option<u32>,
    /// Section this exercise belongs to.
    pub section: Section,
}

impl ExerciseSpec {
    /// Create a spec with only a name, everything else unset.
    #[must_use]
    pub fn named(name: String, section: Section) -> Self {
        Self {
            name,
            reps: None,
            sets: None,
            time_minutes: None,
            section,
        }
    }

    /// Whether this exercise carries enough data to be runnable.
    ///
    /// An exercise qualifies when at least one of reps, sets, or time is
    /// set to a non-zero value.
    #[must_use]
    pub fn is_runnable(&self) -> bool {
        self.reps.unwrap_or(0) > 0
            || self.sets.unwrap_or(0) > 0
            || self.time_minutes.unwrap_or(0) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse() {
        assert_eq!(Section::parse("warmup"), Some(Section::Warmup));
        assert_eq!(Section::parse("Warm-Up"), Some(Section::Warmup));
        assert_eq!(Section::parse("push"), Some(Section::Push));
        assert_eq!(Section::parse("cooldown"), Some(Section::Cooldown));
        assert_eq!(Section::parse("cardio"), None);
    }

    #[test]
    fn test_section_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
    }

    #[test]
    fn test_runnable_requires_a_value() {
        let mut spec = ExerciseSpec::named("Squats".to_string(), Section::Legs);
        assert!(!spec.is_runnable());

        spec.reps = Some(0);
        spec.sets = Some(0);
        spec.time_minutes = Some(0);
        assert!(!spec.is_runnable());

        spec.reps = Some(20);
        assert!(spec.is_runnable());
    }

    #[test]
    fn test_runnable_time_only() {
        let mut spec = ExerciseSpec::named("Plank".to_string(), Section::Core);
        spec.time_minutes = Some(1);
        assert!(spec.is_runnable());
    }
}
