//! Region-averaging ASCII art renderer for raster images
//!
//! An image is split into a grid of square regions. Each region's mean
//! luminance picks one glyph from an ordered threshold table, and the glyphs
//! are printed row by row.

#![forbid(unsafe_code)]

/// One-pass conversion driver tying the pipeline stages together
pub mod algorithm;
/// Luminance aggregation and glyph selection
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Region partitioning and pixel sampling
pub mod spatial;

pub use io::error::{ConversionError, Result};
