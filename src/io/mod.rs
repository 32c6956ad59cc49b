/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Tile file parsing
pub mod loader;
/// Search progress display
pub mod progress;
/// ASCII board rendering
pub mod render;
/// Result output formatting
pub mod report;
