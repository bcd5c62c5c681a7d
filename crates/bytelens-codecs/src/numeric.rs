//! Fixed-width integer and IEEE-754 float codecs.
//!
//! Byte order is split down the middle: 16/32-bit integers read
//! little-endian while the 64-bit integers and both float widths read
//! big-endian. The split is a historical quirk of the output format and
//! is preserved bit-for-bit.

use bytelens_types::{DecodeStep, glyph};

/// Shared fixed-width scaffolding. A full unit decodes through `render`;
/// a trailing partial unit at end of stream collapses into one
/// replacement glyph so its bytes are not dropped silently.
fn fixed<F>(buf: &[u8], size: usize, at_eof: bool, render: F) -> DecodeStep
where
    F: FnOnce(&[u8]) -> String,
{
    if buf.len() >= size {
        DecodeStep::Emit {
            text: render(&buf[..size]),
            consumed: size,
        }
    } else if at_eof {
        DecodeStep::Emit {
            text: glyph::REPLACEMENT.to_string(),
            consumed: buf.len(),
        }
    } else {
        DecodeStep::NeedMore
    }
}

fn le_u16(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

fn be_u32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

fn be_u64(b: &[u8]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&b[..8]);
    u64::from_be_bytes(bytes)
}

pub(crate) fn int8(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 1, at_eof, |b| (b[0] as i8).to_string())
}

pub(crate) fn uint8(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 1, at_eof, |b| b[0].to_string())
}

pub(crate) fn int16(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 2, at_eof, |b| (le_u16(b) as i16).to_string())
}

pub(crate) fn uint16(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 2, at_eof, |b| le_u16(b).to_string())
}

pub(crate) fn int32(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 4, at_eof, |b| (le_u32(b) as i32).to_string())
}

pub(crate) fn uint32(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 4, at_eof, |b| le_u32(b).to_string())
}

pub(crate) fn int64(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 8, at_eof, |b| (be_u64(b) as i64).to_string())
}

pub(crate) fn uint64(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 8, at_eof, |b| be_u64(b).to_string())
}

pub(crate) fn float32(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 4, at_eof, |b| {
        format!("{:12.6}", f32::from_bits(be_u32(b)) as f64)
    })
}

pub(crate) fn float64(buf: &[u8], at_eof: bool) -> DecodeStep {
    fixed(buf, 8, at_eof, |b| {
        format!("{:12.6}", f64::from_bits(be_u64(b)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(step: DecodeStep) -> (String, usize) {
        match step {
            DecodeStep::Emit { text, consumed } => (text, consumed),
            DecodeStep::NeedMore => panic!("expected an emitted unit"),
        }
    }

    #[test]
    fn test_int8_sign() {
        assert_eq!(emit(int8(&[0xFF], false)), ("-1".to_string(), 1));
        assert_eq!(emit(int8(&[0x7F], false)), ("127".to_string(), 1));
        assert_eq!(emit(uint8(&[0xFF], false)), ("255".to_string(), 1));
    }

    #[test]
    fn test_16_and_32_bit_are_little_endian() {
        assert_eq!(emit(uint16(&[0x01, 0x00], false)), ("1".to_string(), 2));
        assert_eq!(emit(uint16(&[0x00, 0x01], false)), ("256".to_string(), 2));
        assert_eq!(emit(int16(&[0xFF, 0xFF], false)), ("-1".to_string(), 2));
        assert_eq!(
            emit(uint32(&[0x01, 0x00, 0x00, 0x00], false)),
            ("1".to_string(), 4)
        );
        assert_eq!(
            emit(int32(&[0xFF, 0xFF, 0xFF, 0xFF], false)),
            ("-1".to_string(), 4)
        );
    }

    #[test]
    fn test_64_bit_is_big_endian() {
        assert_eq!(
            emit(uint64(&[0, 0, 0, 0, 0, 0, 0, 1], false)),
            ("1".to_string(), 8)
        );
        assert_eq!(
            emit(int64(&[0xFF; 8], false)),
            ("-1".to_string(), 8)
        );
    }

    #[test]
    fn test_float_formats_six_fraction_digits() {
        // 1.0f32 big-endian is 3F 80 00 00
        assert_eq!(
            emit(float32(&[0x3F, 0x80, 0x00, 0x00], false)),
            ("    1.000000".to_string(), 4)
        );
        // 1.0f64 big-endian is 3F F0 00 00 00 00 00 00
        assert_eq!(
            emit(float64(&[0x3F, 0xF0, 0, 0, 0, 0, 0, 0], false)),
            ("    1.000000".to_string(), 8)
        );
        assert_eq!(
            emit(float32(&[0x00, 0x00, 0x00, 0x00], false)),
            ("    0.000000".to_string(), 4)
        );
    }

    #[test]
    fn test_partial_unit_waits_then_flushes() {
        assert_eq!(int32(&[0x01, 0x02], false), DecodeStep::NeedMore);
        assert_eq!(
            emit(int32(&[0x01, 0x02], true)),
            ("\u{FFFD}".to_string(), 2)
        );
    }
}
