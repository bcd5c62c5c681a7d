use crate::width::column_width;
use bytelens_codecs::Decode;
use bytelens_types::{CodecSpec, DecodeStep};

/// One active codec plus the bytes it has read but not yet decoded.
///
/// The carry is owned by this instance and nothing else. A multi-byte
/// sequence split across two windows is stitched together here without
/// any shared or global state, so runs and codecs cannot interfere.
pub struct CodecState {
    spec: &'static CodecSpec,
    carry: Vec<u8>,
}

impl CodecState {
    pub fn new(spec: &'static CodecSpec) -> Self {
        Self {
            spec,
            carry: Vec::new(),
        }
    }

    pub fn spec(&self) -> &'static CodecSpec {
        self.spec
    }

    /// Bytes held over for the next window.
    pub fn carry(&self) -> &[u8] {
        &self.carry
    }

    /// Decode one window into this codec's padded column string.
    ///
    /// `at_eof` marks the stream's final window: leftover bytes that can
    /// no longer complete a unit resolve to a replacement glyph instead
    /// of being dropped silently.
    pub fn decode_window(&mut self, window: &[u8], row_width: usize, at_eof: bool) -> String {
        self.carry.extend_from_slice(window);

        let mut units: Vec<String> = Vec::new();
        let mut cursor = 0;
        while cursor < self.carry.len() {
            match self.spec.kind.decode(&self.carry[cursor..], at_eof) {
                DecodeStep::Emit { text, consumed } => {
                    debug_assert!(consumed >= 1, "codec made no progress");
                    cursor += consumed;
                    units.push(text);
                }
                DecodeStep::NeedMore => break,
            }
        }
        self.carry.drain(..cursor);

        let width = column_width(self.spec, row_width);
        format!("{:<width$}", units.join(self.spec.separator))
    }
}
