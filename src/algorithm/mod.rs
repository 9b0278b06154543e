/// Conversion driver and its configuration
pub mod converter;

pub use converter::{AsciiConverter, ConversionConfig, RegionAnalysis};
