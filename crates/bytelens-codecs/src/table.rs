use bytelens_types::{CodecKind, CodecSpec, UnitSize};

/// Built-in codec table. Column order always follows this table; the
/// order flags appear on the command line does not matter.
///
/// The max widths are part of the established output format, historical
/// oddities included (uint16's 11, int32's 10), and stay as they are.
pub static CODECS: &[CodecSpec] = &[
    CodecSpec {
        name: "int8",
        kind: CodecKind::Int8,
        unit_size: UnitSize::Fixed(1),
        separator: ",",
        max_unit_width: 4,
        description: "Signed 8-bit integer",
    },
    CodecSpec {
        name: "uint8",
        kind: CodecKind::Uint8,
        unit_size: UnitSize::Fixed(1),
        separator: ",",
        max_unit_width: 3,
        description: "Unsigned 8-bit integer",
    },
    CodecSpec {
        name: "int16",
        kind: CodecKind::Int16,
        unit_size: UnitSize::Fixed(2),
        separator: ",",
        max_unit_width: 6,
        description: "Signed 16-bit integer (little-endian)",
    },
    CodecSpec {
        name: "uint16",
        kind: CodecKind::Uint16,
        unit_size: UnitSize::Fixed(2),
        separator: ",",
        max_unit_width: 11,
        description: "Unsigned 16-bit integer (little-endian)",
    },
    CodecSpec {
        name: "int32",
        kind: CodecKind::Int32,
        unit_size: UnitSize::Fixed(4),
        separator: ",",
        max_unit_width: 10,
        description: "Signed 32-bit integer (little-endian)",
    },
    CodecSpec {
        name: "uint32",
        kind: CodecKind::Uint32,
        unit_size: UnitSize::Fixed(4),
        separator: ",",
        max_unit_width: 11,
        description: "Unsigned 32-bit integer (little-endian)",
    },
    CodecSpec {
        name: "float32",
        kind: CodecKind::Float32,
        unit_size: UnitSize::Fixed(4),
        separator: ",",
        max_unit_width: 12,
        description: "IEEE 754 single-precision float (big-endian)",
    },
    CodecSpec {
        name: "int64",
        kind: CodecKind::Int64,
        unit_size: UnitSize::Fixed(8),
        separator: ",",
        max_unit_width: 20,
        description: "Signed 64-bit integer (big-endian)",
    },
    CodecSpec {
        name: "uint64",
        kind: CodecKind::Uint64,
        unit_size: UnitSize::Fixed(8),
        separator: ",",
        max_unit_width: 20,
        description: "Unsigned 64-bit integer (big-endian)",
    },
    CodecSpec {
        name: "float64",
        kind: CodecKind::Float64,
        unit_size: UnitSize::Fixed(8),
        separator: ",",
        max_unit_width: 12,
        description: "IEEE 754 double-precision float (big-endian)",
    },
    CodecSpec {
        name: "hex",
        kind: CodecKind::Hex,
        unit_size: UnitSize::Fixed(1),
        separator: ",",
        max_unit_width: 2,
        description: "Hexadecimal encoding",
    },
    CodecSpec {
        name: "ascii",
        kind: CodecKind::Ascii,
        unit_size: UnitSize::Fixed(1),
        separator: "",
        max_unit_width: 1,
        description: "ASCII text; unprintable bytes render as '.', common control bytes as visible glyphs",
    },
    CodecSpec {
        name: "utf8",
        kind: CodecKind::Utf8,
        unit_size: UnitSize::Variable,
        separator: "",
        max_unit_width: 1,
        description: "UTF-8 text; control characters render as visible glyphs, undecodable bytes as U+FFFD",
    },
];

/// Names enabled when the user selects nothing.
pub const DEFAULT_CODECS: [&str; 3] = ["int8", "hex", "ascii"];

/// Look up a built-in codec by its flag name.
pub fn codec_by_name(name: &str) -> Option<&'static CodecSpec> {
    CODECS.iter().find(|spec| spec.name == name)
}

/// Resolve the caller's selection against the built-in table, falling
/// back to the default subset when nothing was enabled.
pub fn select(enabled: &[&str]) -> Vec<&'static CodecSpec> {
    let picked: Vec<&'static CodecSpec> = CODECS
        .iter()
        .filter(|spec| enabled.contains(&spec.name))
        .collect();
    if !picked.is_empty() {
        return picked;
    }
    CODECS
        .iter()
        .filter(|spec| DEFAULT_CODECS.contains(&spec.name))
        .collect()
}
