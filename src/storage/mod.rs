//! Storage layer for repflow.
//!
//! Provides `SQLite`-based persistence for the confirmed exercise plan.
//! The plan is written after every successful workout start and read back
//! at the next session start.

mod database;
mod migrations;

pub use database::Database;
