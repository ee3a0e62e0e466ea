//! Command-line interface for repflow.

pub mod args;
pub mod commands;
