/// Command-line interface and command runner
pub mod cli;
/// Exploration constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Survey progress display
pub mod progress;
/// JSON and text reports
pub mod report;
