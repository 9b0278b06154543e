//! Conversion constants and runtime configuration defaults

/// Default number of output columns
pub const DEFAULT_COLUMNS: u32 = 25;

// Thresholds are scaled by this, not by the requested output width, so the
// chosen glyphs do not shift when `--width` changes
/// Column count that glyph thresholds are scaled by
pub const GLYPH_REFERENCE_COLUMNS: f64 = 25.0;

/// Default luminance thresholds and their glyphs, unordered
///
/// A region matches an entry when its mean luminance is at most
/// `threshold * GLYPH_REFERENCE_COLUMNS`.
pub const CLASSIC_GLYPHS: [(f64, char); 5] = [
    (5.2, ' '),
    (8.0, '#'),
    (8.5, '@'),
    (10.0, 'O'),
    (100.0, ' '),
];

/// Glyph used for cells no threshold matched
pub const FALLBACK_GLYPH: char = ' ';

/// Exit code for every failure the converter reports
pub const FAILURE_EXIT_CODE: u8 = 2;
