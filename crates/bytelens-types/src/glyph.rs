//! Visible stand-ins for bytes that have no printable rendering.

/// Substituted for byte sequences a codec cannot decode.
pub const REPLACEMENT: char = '\u{FFFD}';

/// Glyphs for the control bytes both text codecs remap.
///
/// Everything else below 0x20 (and above 0x7E for the ascii codec) falls
/// back to the codec's own "unprintable" rendering.
pub fn control_glyph(byte: u8) -> Option<char> {
    match byte {
        0x00 => Some('␀'), // NUL
        0x07 => Some('␇'), // BEL
        0x08 => Some('⌫'), // BS
        0x09 => Some('⇥'), // TAB
        0x0A => Some('⏎'), // LF
        0x0B => Some('↴'), // VT
        0x0C => Some('↵'), // FF
        0x0D => Some('↵'), // CR
        0x1B => Some('⎋'), // ESC
        _ => None,
    }
}

/// Display form of a decoded character: control characters are replaced
/// with visible glyphs, everything else passes through unchanged.
///
/// The Unicode line separators NEL/LS/PS share the newline glyph;
/// remaining control characters collapse to the NUL symbol.
pub fn display_char(c: char) -> char {
    if c.is_ascii() {
        if let Some(g) = control_glyph(c as u8) {
            return g;
        }
    }
    match c {
        '\u{0085}' | '\u{2028}' | '\u{2029}' => '⏎',
        c if c.is_control() => '␀',
        c => c,
    }
}
