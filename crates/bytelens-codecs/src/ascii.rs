use bytelens_types::{DecodeStep, glyph};

/// Printable bytes render literally, mapped control bytes as their
/// glyphs, everything else as a dot.
pub(crate) fn decode(buf: &[u8]) -> DecodeStep {
    let byte = buf[0];
    let text = match glyph::control_glyph(byte) {
        Some(g) => g.to_string(),
        None if (32..=126).contains(&byte) => (byte as char).to_string(),
        None => ".".to_string(),
    };
    DecodeStep::Emit { text, consumed: 1 }
}
