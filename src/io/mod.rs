//! Input/output operations and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Constants, defaults and corpus options
pub mod configuration;
/// Tile providers backed by image files
pub mod corpus;
/// Error types
pub mod error;
/// Image decoding and export
pub mod image;
/// Terminal progress display
pub mod progress;
