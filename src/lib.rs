//! repflow - a workout session timer for the terminal
//!
//! This crate builds an ordered queue of workout steps from an exercise plan
//! and drives it through timed exercise and rest periods in an interactive
//! terminal player.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod plan;
pub mod session;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::RepflowError;
pub use session::SessionEngine;
