//! Input/output: CLI, image decoding, text rendering and errors

/// Command-line argument parsing and the stdout runner
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image loading and channel narrowing
pub mod image;
/// Output grid and text rendering
pub mod render;
