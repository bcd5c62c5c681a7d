use bytelens_types::CodecSpec;

/// Character width of one codec's column for a given row width.
///
/// Computed from configuration alone, never from what a particular row
/// happened to render, so the header and every data row agree even when
/// a short final window decodes fewer units. Variable-width codecs are
/// sized for their worst case of one unit per byte.
pub fn column_width(spec: &CodecSpec, row_width: usize) -> usize {
    let units = row_width / spec.unit_size.min_bytes();
    units * spec.max_unit_width + units.saturating_sub(1) * spec.separator.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytelens_codecs::codec_by_name;

    fn width_of(name: &str, row_width: usize) -> usize {
        let spec = codec_by_name(name).unwrap();
        column_width(spec, row_width)
    }

    #[test]
    fn test_widths_for_eight_byte_rows() {
        // 8 units of 2 chars plus 7 commas
        assert_eq!(width_of("hex", 8), 23);
        // glyphs are one character and there is no separator
        assert_eq!(width_of("ascii", 8), 8);
        assert_eq!(width_of("utf8", 8), 8);
        // 8 units of up to 4 chars plus 7 commas
        assert_eq!(width_of("int8", 8), 39);
        // one unit, no separator
        assert_eq!(width_of("int64", 8), 20);
        assert_eq!(width_of("float64", 8), 12);
        // two units of up to 12 chars plus 1 comma
        assert_eq!(width_of("float32", 8), 25);
    }

    #[test]
    fn test_width_scales_linearly_with_row_width() {
        assert_eq!(width_of("hex", 16), 47);
        assert_eq!(width_of("ascii", 32), 32);
        assert_eq!(width_of("int64", 16), 41);
    }
}
