//! Region brightness measurement and glyph selection

/// Ordered luminance threshold table
pub mod glyphs;
/// Mean luminance over pixel samples
pub mod luminance;

pub use glyphs::{GlyphTable, GlyphThreshold};
pub use luminance::RegionLuminance;
