//! Session events emitted for the presentation layer.

use serde::Serialize;

use super::queue::WorkoutStep;

/// A state change emitted by the session engine.
///
/// The engine never renders anything itself; subscribers (the TUI player,
/// the audio cue) react to these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new step became the current one.
    StepLoaded {
        /// The loaded step.
        step: WorkoutStep,
    },
    /// A rest period started.
    RestStarted {
        /// Length of the rest countdown.
        seconds: u32,
    },
    /// The countdown advanced by one second.
    Tick {
        /// Seconds left on the countdown.
        seconds_remaining: u32,
    },
    /// Pause state changed.
    Paused {
        /// Whether the session is now paused.
        paused: bool,
    },
    /// A countdown reached zero (audio cue hook).
    TimerElapsed,
    /// The whole workout finished.
    Completed,
    /// The session was exited before completion.
    Exited,
}
