//! Input/output operations: CLI, PNG workflow, errors, and progress display

/// Command-line interface and batch file processing
pub mod cli;
/// Cutting constants and PNG workflow defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG occupancy loading and two-color piece export
pub mod image;
/// Batch progress display
pub mod progress;
