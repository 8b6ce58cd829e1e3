/// Command-line interface and puzzle processing
pub mod cli;
/// Defaults and limits for runtime configuration
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Stderr logging backend
pub mod logging;
/// Spinner showing the running solution count
pub mod progress;
/// Puzzle description parsing
pub mod puzzle;
/// Solution output formatting
pub mod render;
