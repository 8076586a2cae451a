//! Input/output collaborators of the command-line tool

/// Command-line parsing and run orchestration
pub mod cli;
/// Default values and shared constants
pub mod configuration;
/// Timing export for repeated runs
pub mod csv;
/// Error types and result alias
pub mod error;
/// PNG rendering of finished mazes
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress display across runs
pub mod progress;
