//! Player state for the workout TUI.

use std::io::Write;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::Config;
use crate::error::RepflowError;
use crate::session::{Phase, SessionEngine, SessionEvent, TickClock, WorkoutStep};

/// How a player session ended.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerOutcome {
    /// Whether the whole workout was completed.
    pub completed: bool,
    /// Number of steps the queue contained.
    pub steps_total: usize,
}

/// Player state: the engine plus presentation concerns.
pub struct Player {
    engine: SessionEngine,
    clock: TickClock,
    steps_total: usize,
    cue_sound: bool,
    completion_hold: Duration,
    completed_at: Option<Instant>,
    completed: bool,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the exit confirmation prompt is showing.
    pub confirming_exit: bool,
    /// Whether the player loop should stop.
    pub should_quit: bool,
}

impl Player {
    /// Create a player and start the session.
    ///
    /// # Errors
    ///
    /// Returns [`RepflowError::EmptyQueue`] if the queue is empty.
    pub fn new(queue: Vec<WorkoutStep>, config: &Config) -> Result<Self, RepflowError> {
        let steps_total = queue.len();
        let mut engine = SessionEngine::new(config.session.rest_seconds);
        let events = engine.start(queue)?;

        let mut player = Self {
            engine,
            clock: TickClock::start(),
            steps_total,
            cue_sound: config.session.cue_sound,
            completion_hold: Duration::from_secs(u64::from(
                config.session.completion_display_seconds,
            )),
            completed_at: None,
            completed: false,
            status: Some("Press ? for keys".to_string()),
            confirming_exit: false,
            should_quit: false,
        };
        player.apply(&events);
        Ok(player)
    }

    /// How long the event loop may block before the next clock check.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        self.clock.timeout()
    }

    /// Advance the wall clock: deliver a tick to the engine when due, and
    /// close the player once the completion banner has been shown long
    /// enough.
    ///
    /// # Errors
    ///
    /// Propagates engine invariant violations.
    pub fn on_clock(&mut self) -> Result<(), RepflowError> {
        if let Some(at) = self.completed_at {
            // Keep the clock schedule moving so the poll timeout stays sane
            self.clock.tick_due();
            if at.elapsed() >= self.completion_hold {
                self.should_quit = true;
            }
            return Ok(());
        }

        if self.clock.tick_due() {
            let events = self.engine.tick()?;
            self.apply(&events);
        }
        Ok(())
    }

    /// Pause or resume the countdown.
    pub fn toggle_pause(&mut self) {
        let events = self.engine.toggle_pause();
        self.apply(&events);
    }

    /// Move on to the rest period (or completion, on the last step).
    ///
    /// A rejected skip during rest becomes a status warning, not an error.
    ///
    /// # Errors
    ///
    /// Propagates engine invariant violations.
    pub fn advance(&mut self) -> Result<(), RepflowError> {
        match self.engine.advance() {
            Ok(events) => {
                self.apply(&events);
                Ok(())
            }
            Err(RepflowError::RestInProgress) => {
                self.status =
                    Some("You must complete the rest period! Take your rest seriously.".to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Restart the current exercise or rest period.
    ///
    /// # Errors
    ///
    /// Propagates engine invariant violations.
    pub fn restart(&mut self) -> Result<(), RepflowError> {
        let events = self.engine.restart()?;
        self.apply(&events);
        Ok(())
    }

    /// Show the exit confirmation prompt.
    pub fn request_exit(&mut self) {
        if self.engine.phase() == Phase::Completed {
            self.should_quit = true;
        } else {
            self.confirming_exit = true;
        }
    }

    /// Confirmed: abort the session.
    pub fn confirm_exit(&mut self) {
        self.confirming_exit = false;
        let events = self.engine.exit();
        self.apply(&events);
    }

    /// Dismiss the exit confirmation prompt.
    pub fn cancel_exit(&mut self) {
        self.confirming_exit = false;
    }

    /// Show the key help in the status line.
    pub fn show_help(&mut self) {
        self.status =
            Some("space:pause | n:next | r:restart | q:quit".to_string());
    }

    /// Read access for rendering.
    #[must_use]
    pub const fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    /// Step counter for the header, 1-based.
    #[must_use]
    pub const fn step_number(&self) -> usize {
        self.engine.position() + 1
    }

    /// Total steps in this workout.
    #[must_use]
    pub const fn steps_total(&self) -> usize {
        self.steps_total
    }

    /// The session outcome once the loop has stopped.
    #[must_use]
    pub const fn outcome(&self) -> PlayerOutcome {
        PlayerOutcome {
            completed: self.completed,
            steps_total: self.steps_total,
        }
    }

    /// React to engine events.
    fn apply(&mut self, events: &[SessionEvent]) {
        for event in events {
            match event {
                SessionEvent::TimerElapsed => self.ring_bell(),
                SessionEvent::StepLoaded { .. } => self.status = None,
                SessionEvent::RestStarted { .. } => {
                    self.status = Some("Rest up. The next step loads automatically.".to_string());
                }
                SessionEvent::Completed => {
                    self.completed = true;
                    self.completed_at = Some(Instant::now());
                    self.status = None;
                }
                SessionEvent::Exited => self.should_quit = true,
                SessionEvent::Tick { .. } | SessionEvent::Paused { .. } => {}
            }
        }
    }

    /// Audio cue: terminal bell.
    fn ring_bell(&self) {
        if self.cue_sound {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{ExerciseSpec, Section};
    use crate::session::build_queue;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.session.cue_sound = false;
        config
    }

    fn two_step_queue() -> Vec<WorkoutStep> {
        build_queue(&[
            ExerciseSpec {
                name: "Pushup".to_string(),
                reps: Some(12),
                sets: None,
                time_minutes: None,
                section: Section::Push,
            },
            ExerciseSpec {
                name: "Plank".to_string(),
                reps: None,
                sets: None,
                time_minutes: Some(1),
                section: Section::Core,
            },
        ])
    }

    #[test]
    fn test_player_starts_on_first_step() {
        let player = Player::new(two_step_queue(), &test_config()).unwrap();

        assert_eq!(player.engine().phase(), Phase::Exercise);
        assert_eq!(player.step_number(), 1);
        assert_eq!(player.steps_total(), 2);
        assert!(!player.should_quit);
    }

    #[test]
    fn test_player_empty_queue_fails() {
        assert!(matches!(
            Player::new(Vec::new(), &test_config()),
            Err(RepflowError::EmptyQueue)
        ));
    }

    #[test]
    fn test_rejected_skip_sets_warning_status() {
        let mut player = Player::new(two_step_queue(), &test_config()).unwrap();

        player.advance().unwrap();
        assert!(player.engine().is_resting());

        player.status = None;
        player.advance().unwrap();
        assert!(player.status.is_some());
        assert!(player.engine().is_resting());
    }

    #[test]
    fn test_exit_flow() {
        let mut player = Player::new(two_step_queue(), &test_config()).unwrap();

        player.request_exit();
        assert!(player.confirming_exit);
        assert!(!player.should_quit);

        player.cancel_exit();
        assert!(!player.confirming_exit);

        player.request_exit();
        player.confirm_exit();
        assert!(player.should_quit);
        assert!(!player.outcome().completed);
    }

    #[test]
    fn test_completion_outcome() {
        let mut player = Player::new(two_step_queue(), &test_config()).unwrap();

        // Skip through: rest after step 1, then finish step 2
        player.advance().unwrap();
        for _ in 0..=120 {
            let events = player.engine.tick().unwrap();
            player.apply(&events);
        }
        assert_eq!(player.engine().phase(), Phase::Exercise);

        for _ in 0..=60 {
            let events = player.engine.tick().unwrap();
            player.apply(&events);
        }

        assert_eq!(player.engine().phase(), Phase::Completed);
        assert!(player.outcome().completed);
    }
}
