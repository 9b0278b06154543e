//! Luminance to glyph mapping through an ordered threshold table

use crate::io::configuration::{CLASSIC_GLYPHS, FALLBACK_GLYPH, GLYPH_REFERENCE_COLUMNS};
use crate::io::error::{Result, invalid_parameter};
use log::warn;

/// A luminance threshold and the glyph drawn for regions at or below it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphThreshold {
    /// Unscaled threshold; the table multiplies it by its scale
    pub threshold: f64,
    /// Character drawn for matching regions
    pub glyph: char,
}

/// Threshold table sorted ascending by threshold
///
/// Lookup walks the entries from the lowest threshold up and picks the first
/// one whose scaled threshold is at least the luminance. Entries sharing a
/// threshold keep their insertion order, so the earlier one wins.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphTable {
    entries: Vec<GlyphThreshold>,
    scale: f64,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::classic()
    }
}

impl GlyphTable {
    /// Build a table from `(threshold, glyph)` pairs in any order
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the table is empty, a threshold
    /// is not finite, or `scale` is not a finite positive number
    pub fn new<I>(entries: I, scale: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, char)>,
    {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(invalid_parameter(
                "glyph_scale",
                &scale,
                &"must be a finite positive number",
            ));
        }

        let entries: Vec<GlyphThreshold> = entries
            .into_iter()
            .map(|(threshold, glyph)| GlyphThreshold { threshold, glyph })
            .collect();

        if entries.is_empty() {
            return Err(invalid_parameter(
                "glyph_table",
                &"[]",
                &"at least one threshold is required",
            ));
        }

        if let Some(entry) = entries.iter().find(|entry| !entry.threshold.is_finite()) {
            return Err(invalid_parameter(
                "glyph_threshold",
                &entry.threshold,
                &"thresholds must be finite",
            ));
        }

        Ok(Self::sorted(entries, scale))
    }

    /// The default five-entry table scaled by the reference column count
    pub fn classic() -> Self {
        let entries = CLASSIC_GLYPHS
            .iter()
            .map(|&(threshold, glyph)| GlyphThreshold { threshold, glyph })
            .collect();
        Self::sorted(entries, GLYPH_REFERENCE_COLUMNS)
    }

    fn sorted(mut entries: Vec<GlyphThreshold>, scale: f64) -> Self {
        entries.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        Self { entries, scale }
    }

    /// Entries in lookup order
    pub fn entries(&self) -> &[GlyphThreshold] {
        &self.entries
    }

    /// Factor every threshold is multiplied by before comparison
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    fn matching(&self, luminance: f64) -> Option<&GlyphThreshold> {
        self.entries
            .iter()
            .find(|entry| luminance <= entry.threshold * self.scale)
    }

    /// Glyph of the first entry matching `luminance`
    pub fn select(&self, luminance: f64) -> Option<char> {
        self.matching(luminance).map(|entry| entry.glyph)
    }

    /// Unscaled threshold of the first entry matching `luminance`
    pub fn threshold_for(&self, luminance: f64) -> Option<f64> {
        self.matching(luminance).map(|entry| entry.threshold)
    }

    /// Glyph for `luminance`, or the fallback glyph when nothing matches
    pub fn glyph_for(&self, luminance: f64) -> char {
        self.select(luminance).unwrap_or_else(|| {
            warn!("No glyph threshold matches luminance {luminance}, using fallback");
            FALLBACK_GLYPH
        })
    }
}
