//! Spatial data structures over the source image
//!
//! This module contains spatial-related functionality including:
//! - Partitioning an image into a grid of square regions
//! - Borrowed views over single regions
//! - Lazy pixel sampling within a view

/// Region grid layout and region views
pub mod region;
/// Row-major pixel sampling
pub mod sampler;

pub use region::{RegionBounds, RegionGrid, RegionView};
pub use sampler::{PixelSample, PixelSamples};
