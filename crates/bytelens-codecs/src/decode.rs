use crate::{ascii, hex, numeric, utf8};
use bytelens_types::{CodecKind, DecodeStep};

/// Decode capability, implemented once for the closed set of codec kinds.
pub trait Decode {
    /// Decode one unit from the front of `buf`.
    ///
    /// `buf` is the codec's carry followed by the bytes of the current
    /// window and is never empty. `at_eof` signals that no further bytes
    /// will arrive, so a sequence that cannot complete must resolve to a
    /// replacement glyph instead of waiting.
    fn decode(&self, buf: &[u8], at_eof: bool) -> DecodeStep;
}

impl Decode for CodecKind {
    fn decode(&self, buf: &[u8], at_eof: bool) -> DecodeStep {
        match self {
            CodecKind::Int8 => numeric::int8(buf, at_eof),
            CodecKind::Uint8 => numeric::uint8(buf, at_eof),
            CodecKind::Int16 => numeric::int16(buf, at_eof),
            CodecKind::Uint16 => numeric::uint16(buf, at_eof),
            CodecKind::Int32 => numeric::int32(buf, at_eof),
            CodecKind::Uint32 => numeric::uint32(buf, at_eof),
            CodecKind::Float32 => numeric::float32(buf, at_eof),
            CodecKind::Int64 => numeric::int64(buf, at_eof),
            CodecKind::Uint64 => numeric::uint64(buf, at_eof),
            CodecKind::Float64 => numeric::float64(buf, at_eof),
            CodecKind::Hex => hex::decode(buf),
            CodecKind::Ascii => ascii::decode(buf),
            CodecKind::Utf8 => utf8::decode(buf, at_eof),
        }
    }
}
