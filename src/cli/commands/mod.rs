//! Command implementations for the repflow CLI.

mod completions;
mod plan;
mod start;

pub use completions::completions;
pub use plan::{plan, reset};
pub use start::start;
