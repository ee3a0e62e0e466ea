//! Error types for repflow.

use thiserror::Error;

/// All errors surfaced by repflow.
#[derive(Debug, Error)]
pub enum RepflowError {
    /// The exercise plan produced no runnable steps.
    #[error("nothing to do: set reps, sets, or time on at least one exercise")]
    EmptyQueue,

    /// An attempt was made to skip a mandatory rest period.
    #[error("rest period in progress: rest cannot be skipped")]
    RestInProgress,

    /// Internal invariant violation: the session position left the queue
    /// bounds outside of the completion check.
    #[error("step index {index} out of bounds for queue of {len} steps")]
    InvalidStepIndex {
        /// The offending index.
        index: usize,
        /// The queue length at the time of the violation.
        len: usize,
    },

    /// Database or plan-persistence failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration loading or path resolution failure.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid user input (section names, etc.).
    #[error("parse error: {0}")]
    Parse(String),

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup or event-loop failure.
    #[error("terminal error: {0}")]
    Terminal(String),
}
