//! Tests for ordered glyph threshold lookup

#[cfg(test)]
mod tests {
    use cage::ConversionError;
    use cage::analysis::glyphs::GlyphTable;
    use cage::io::configuration::{FALLBACK_GLYPH, GLYPH_REFERENCE_COLUMNS};

    // Tests the classic table is stored in ascending threshold order
    // Verified by skipping the sort
    #[test]
    fn test_classic_table_is_sorted() {
        let table = GlyphTable::classic();
        let thresholds: Vec<f64> = table.entries().iter().map(|e| e.threshold).collect();

        assert_eq!(thresholds, vec![5.2, 8.0, 8.5, 10.0, 100.0]);
        assert!((table.scale() - GLYPH_REFERENCE_COLUMNS).abs() < f64::EPSILON);
        assert_eq!(GlyphTable::default(), table);
    }

    // Tests glyph selection at and around each scaled threshold
    // Verified by using a strict less-than comparison
    #[test]
    fn test_classic_selection_bands() {
        let table = GlyphTable::classic();

        assert_eq!(table.select(0.0), Some(' '));
        assert_eq!(table.select(130.0), Some(' '));
        assert_eq!(table.select(131.0), Some('#'));
        assert_eq!(table.select(200.0), Some('#'));
        assert_eq!(table.select(205.0), Some('@'));
        assert_eq!(table.select(212.5), Some('@'));
        assert_eq!(table.select(240.0), Some('O'));
        assert_eq!(table.select(250.0), Some('O'));
        assert_eq!(table.select(255.0), Some(' '));
    }

    // Tests brighter regions never select a lower threshold
    // Verified by iterating the table in descending order
    #[test]
    fn test_selection_is_monotonic() {
        let table = GlyphTable::classic();

        let mut previous = f64::NEG_INFINITY;
        for step in 0..=510 {
            let luminance = f64::from(step) / 2.0;
            let threshold = table.threshold_for(luminance);
            assert!(threshold.is_some(), "no threshold for {luminance}");
            let current = threshold.unwrap_or(f64::NAN);
            assert!(current >= previous, "{current} < {previous} at {luminance}");
            previous = current;
        }
    }

    // Tests unordered input is sorted before lookup
    // Verified by keeping insertion order
    #[test]
    fn test_new_sorts_entries() -> cage::Result<()> {
        let table = GlyphTable::new([(10.0, 'b'), (1.0, 'a'), (5.0, 'm')], 1.0)?;

        assert_eq!(table.select(0.5), Some('a'));
        assert_eq!(table.select(3.0), Some('m'));
        assert_eq!(table.select(7.0), Some('b'));
        Ok(())
    }

    // Tests equal thresholds resolve to the entry inserted first
    // Verified by using an unstable sort
    #[test]
    fn test_duplicate_thresholds_keep_insertion_order() -> cage::Result<()> {
        let table = GlyphTable::new([(2.0, 'x'), (1.0, 'a'), (2.0, 'y')], 1.0)?;

        assert_eq!(table.select(1.5), Some('x'));
        Ok(())
    }

    // Tests luminance above every bound falls back to a space
    // Verified by returning the last entry's glyph instead
    #[test]
    fn test_glyph_for_falls_back_when_unmatched() -> cage::Result<()> {
        let table = GlyphTable::new([(1.0, '#')], 100.0)?;

        assert_eq!(table.select(150.0), None);
        assert_eq!(table.glyph_for(150.0), FALLBACK_GLYPH);
        assert_eq!(table.glyph_for(f64::NAN), FALLBACK_GLYPH);
        assert_eq!(table.glyph_for(50.0), '#');
        Ok(())
    }

    // Tests invalid tables are rejected at construction
    // Verified by removing each validation in turn
    #[test]
    fn test_new_rejects_invalid_tables() {
        let empty = GlyphTable::new(Vec::<(f64, char)>::new(), 1.0);
        assert!(matches!(empty, Err(ConversionError::InvalidParameter { .. })));

        let nan = GlyphTable::new([(f64::NAN, '#')], 1.0);
        assert!(matches!(nan, Err(ConversionError::InvalidParameter { .. })));

        let zero_scale = GlyphTable::new([(1.0, '#')], 0.0);
        assert!(matches!(
            zero_scale,
            Err(ConversionError::InvalidParameter { .. })
        ));

        let infinite_scale = GlyphTable::new([(1.0, '#')], f64::INFINITY);
        assert!(matches!(
            infinite_scale,
            Err(ConversionError::InvalidParameter { .. })
        ));
    }
}
