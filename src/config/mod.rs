//! Configuration for repflow.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, SessionConfig};
