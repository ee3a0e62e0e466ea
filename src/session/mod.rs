//! Workout session core.
//!
//! Two pieces: the queue builder, a pure transformation from the exercise
//! plan to an ordered sequence of workout steps, and the session engine,
//! the state machine that drives those steps through countdowns and rest
//! periods under an external one-second clock.

pub mod clock;
pub mod engine;
pub mod event;
pub mod queue;

pub use clock::{format_hhmmss, TickClock};
pub use engine::{Phase, SessionEngine, DEFAULT_REST_SECONDS};
pub use event::SessionEvent;
pub use queue::{build_queue, WorkoutStep};
