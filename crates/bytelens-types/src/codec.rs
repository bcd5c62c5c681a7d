/// How many bytes one rendered unit consumes from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSize {
    /// Exactly this many bytes per unit.
    Fixed(usize),
    /// Self-delimiting; the decoder reports how much it consumed.
    Variable,
}

impl UnitSize {
    /// Smallest span one unit can occupy. Variable-width codecs advance
    /// at least one byte per emitted unit, which is what keeps column
    /// arithmetic and progress guarantees finite.
    pub fn min_bytes(&self) -> usize {
        match self {
            UnitSize::Fixed(n) => *n,
            UnitSize::Variable => 1,
        }
    }
}

/// Closed set of built-in decoding strategies.
///
/// Each kind is dispatched through one decode operation (see the
/// `Decode` trait in bytelens-codecs) rather than open-ended dynamic
/// dispatch; the set of codecs is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Int64,
    Uint64,
    Float64,
    Hex,
    Ascii,
    Utf8,
}

/// Outcome of decoding one unit from the front of a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStep {
    /// One rendered unit plus the byte count it consumed (always >= 1,
    /// so the caller is guaranteed to make progress).
    Emit { text: String, consumed: usize },
    /// The leading bytes could still become a valid unit; call again
    /// once more input has been appended.
    NeedMore,
}

/// Static description of one byte-to-text transformation.
#[derive(Debug, Clone, Copy)]
pub struct CodecSpec {
    /// Unique across the built-in table; doubles as the column header
    /// and the CLI flag name.
    pub name: &'static str,
    pub kind: CodecKind,
    pub unit_size: UnitSize,
    /// Inserted between consecutive units within a row. At most one
    /// character.
    pub separator: &'static str,
    /// Widest rendering a single unit is expected to take, in
    /// characters. Drives column alignment; not enforced as truncation.
    pub max_unit_width: usize,
    /// One-line help text surfaced by the CLI flag.
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_size_min_bytes() {
        assert_eq!(UnitSize::Fixed(4).min_bytes(), 4);
        assert_eq!(UnitSize::Variable.min_bytes(), 1);
    }
}
