//! Input/output collaborators, configuration and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Default parameters and limits
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Progress display for batch runs
pub mod progress;
