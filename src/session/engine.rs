//! Workout session engine.
//!
//! Owns all session state and drives exercise / rest / completion
//! transitions. The engine itself never blocks and never sleeps: an
//! external one-second clock calls [`SessionEngine::tick`], and every other
//! operation is invoked synchronously from user input. At most one
//! countdown is ever active; installing a new one replaces the previous
//! state wholesale.

use serde::Serialize;

use super::event::SessionEvent;
use super::queue::WorkoutStep;
use crate::error::RepflowError;

/// Default rest period between steps, in seconds.
pub const DEFAULT_REST_SECONDS: u32 = 120;

/// Top-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No session running.
    Idle,
    /// An exercise step is current.
    Exercise,
    /// A rest countdown is running.
    Rest,
    /// The workout finished.
    Completed,
}

/// Pending transition during the one-second settle gap after a countdown
/// reaches zero. Single-shot: taken exactly once by the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settle {
    /// Rest finished; move to the next step.
    NextStep,
    /// Exercise countdown finished; rest, or complete if it was the last.
    RestOrComplete,
}

/// The workout session state machine.
#[derive(Debug)]
pub struct SessionEngine {
    queue: Vec<WorkoutStep>,
    position: usize,
    seconds_remaining: u32,
    countdown_active: bool,
    paused: bool,
    resting: bool,
    settle: Option<Settle>,
    phase: Phase,
    rest_seconds: u32,
}

impl SessionEngine {
    /// Create an idle engine with the given rest period length.
    #[must_use]
    pub const fn new(rest_seconds: u32) -> Self {
        Self {
            queue: Vec::new(),
            position: 0,
            seconds_remaining: 0,
            countdown_active: false,
            paused: false,
            resting: false,
            settle: None,
            phase: Phase::Idle,
            rest_seconds,
        }
    }

    /// Start a session over the given queue.
    ///
    /// # Errors
    ///
    /// Returns [`RepflowError::EmptyQueue`] if the queue is empty; the
    /// engine stays idle.
    pub fn start(&mut self, queue: Vec<WorkoutStep>) -> Result<Vec<SessionEvent>, RepflowError> {
        if queue.is_empty() {
            return Err(RepflowError::EmptyQueue);
        }

        self.queue = queue;
        let mut events = Vec::new();
        self.load_step(0, &mut events)?;
        Ok(events)
    }

    /// Advance the clock by one second.
    ///
    /// No-op while paused or when no countdown is running. A pending settle
    /// transition consumes the tick instead of the countdown.
    ///
    /// # Errors
    ///
    /// Propagates the internal bounds invariant; unreachable in practice.
    pub fn tick(&mut self) -> Result<Vec<SessionEvent>, RepflowError> {
        let mut events = Vec::new();

        // The settle gap is scheduling, not a countdown: it fires exactly
        // one tick after the timer elapsed, pause or not.
        if let Some(settle) = self.settle.take() {
            match settle {
                Settle::NextStep => {
                    let next = self.position + 1;
                    self.load_step(next, &mut events)?;
                }
                Settle::RestOrComplete => {
                    if self.position + 1 >= self.queue.len() {
                        self.complete(&mut events);
                    } else {
                        self.enter_rest(&mut events);
                    }
                }
            }
            return Ok(events);
        }

        if self.paused || !self.countdown_active || self.seconds_remaining == 0 {
            return Ok(events);
        }

        self.seconds_remaining -= 1;
        events.push(SessionEvent::Tick {
            seconds_remaining: self.seconds_remaining,
        });

        if self.seconds_remaining == 0 {
            self.countdown_active = false;
            events.push(SessionEvent::TimerElapsed);
            self.settle = Some(if self.resting {
                Settle::NextStep
            } else {
                Settle::RestOrComplete
            });
        }

        Ok(events)
    }

    /// Flip the pause flag.
    ///
    /// Pausing freezes the remaining time exactly; resuming picks up where
    /// it left off. No-op outside an active session.
    pub fn toggle_pause(&mut self) -> Vec<SessionEvent> {
        if !matches!(self.phase, Phase::Exercise | Phase::Rest) {
            return Vec::new();
        }

        self.paused = !self.paused;
        vec![SessionEvent::Paused {
            paused: self.paused,
        }]
    }

    /// Restart the current step or rest period from the top.
    ///
    /// # Errors
    ///
    /// Propagates the internal bounds invariant; unreachable in practice.
    pub fn restart(&mut self) -> Result<Vec<SessionEvent>, RepflowError> {
        let mut events = Vec::new();
        match self.phase {
            Phase::Rest => self.enter_rest(&mut events),
            Phase::Exercise => self.load_step(self.position, &mut events)?,
            Phase::Idle | Phase::Completed => {}
        }
        Ok(events)
    }

    /// Move on from the current exercise.
    ///
    /// Never jumps straight to the next exercise: unless this was the last
    /// step, a rest period is inserted first.
    ///
    /// # Errors
    ///
    /// Returns [`RepflowError::RestInProgress`] during rest; the state is
    /// left unchanged.
    pub fn advance(&mut self) -> Result<Vec<SessionEvent>, RepflowError> {
        if self.resting {
            return Err(RepflowError::RestInProgress);
        }

        let mut events = Vec::new();
        if self.phase != Phase::Exercise {
            return Ok(events);
        }

        if self.position + 1 >= self.queue.len() {
            self.complete(&mut events);
        } else {
            self.enter_rest(&mut events);
        }
        Ok(events)
    }

    /// Abort the session and return to idle.
    ///
    /// Confirmation is the caller's concern; once called, the reset is
    /// unconditional.
    pub fn exit(&mut self) -> Vec<SessionEvent> {
        self.reset();
        self.phase = Phase::Idle;
        vec![SessionEvent::Exited]
    }

    /// Make step `index` current, or complete the workout when the index
    /// is past the end of the queue.
    fn load_step(
        &mut self,
        index: usize,
        events: &mut Vec<SessionEvent>,
    ) -> Result<(), RepflowError> {
        if index >= self.queue.len() {
            self.complete(events);
            return Ok(());
        }

        let step = self
            .queue
            .get(index)
            .cloned()
            .ok_or(RepflowError::InvalidStepIndex {
                index,
                len: self.queue.len(),
            })?;

        self.position = index;
        self.paused = false;
        self.resting = false;
        self.settle = None;
        self.phase = Phase::Exercise;

        if let Some(minutes) = step.time_minutes.filter(|m| *m > 0) {
            self.seconds_remaining = minutes * 60;
            self.countdown_active = true;
        } else {
            // Rep-based step: display only, no active timer.
            self.seconds_remaining = 0;
            self.countdown_active = false;
        }

        events.push(SessionEvent::StepLoaded { step });
        Ok(())
    }

    /// Start a rest countdown. Replaces whatever countdown was running.
    fn enter_rest(&mut self, events: &mut Vec<SessionEvent>) {
        self.resting = true;
        self.paused = false;
        self.settle = None;
        self.seconds_remaining = self.rest_seconds;
        self.countdown_active = true;
        self.phase = Phase::Rest;

        events.push(SessionEvent::RestStarted {
            seconds: self.rest_seconds,
        });
    }

    /// Finish the workout: stop the timer, discard the queue, signal.
    fn complete(&mut self, events: &mut Vec<SessionEvent>) {
        self.reset();
        self.phase = Phase::Completed;
        events.push(SessionEvent::Completed);
    }

    /// Clear all mutable session state.
    fn reset(&mut self) {
        self.queue.clear();
        self.position = 0;
        self.seconds_remaining = 0;
        self.countdown_active = false;
        self.paused = false;
        self.resting = false;
        self.settle = None;
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The step at the current position, if any.
    #[must_use]
    pub fn current_step(&self) -> Option<&WorkoutStep> {
        self.queue.get(self.position)
    }

    /// Seconds left on the active countdown.
    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Whether a countdown is currently running.
    #[must_use]
    pub const fn countdown_active(&self) -> bool {
        self.countdown_active
    }

    /// Whether the session is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a rest period is in progress.
    #[must_use]
    pub const fn is_resting(&self) -> bool {
        self.resting
    }

    /// Zero-based position in the queue.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of steps in the queue.
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
