use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bytelens")]
#[command(about = "Render a byte stream through several codecs at once", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Signed 8-bit integer
    #[arg(long)]
    pub int8: bool,

    /// Unsigned 8-bit integer
    #[arg(long)]
    pub uint8: bool,

    /// Signed 16-bit integer (little-endian)
    #[arg(long)]
    pub int16: bool,

    /// Unsigned 16-bit integer (little-endian)
    #[arg(long)]
    pub uint16: bool,

    /// Signed 32-bit integer (little-endian)
    #[arg(long)]
    pub int32: bool,

    /// Unsigned 32-bit integer (little-endian)
    #[arg(long)]
    pub uint32: bool,

    /// IEEE 754 single-precision float (big-endian)
    #[arg(long)]
    pub float32: bool,

    /// Signed 64-bit integer (big-endian)
    #[arg(long)]
    pub int64: bool,

    /// Unsigned 64-bit integer (big-endian)
    #[arg(long)]
    pub uint64: bool,

    /// IEEE 754 double-precision float (big-endian)
    #[arg(long)]
    pub float64: bool,

    /// Hexadecimal encoding
    #[arg(long)]
    pub hex: bool,

    /// ASCII text; unprintable bytes render as '.', common control bytes as visible glyphs
    #[arg(long)]
    pub ascii: bool,

    /// UTF-8 text; control characters render as visible glyphs, undecodable bytes as U+FFFD
    #[arg(long)]
    pub utf8: bool,

    /// The file to read input from (stdin by default)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// How many bytes to print per line (must be a positive multiple of 8)
    #[arg(long, default_value_t = 8)]
    pub width: usize,

    /// How many lines to print (0 = unbounded)
    #[arg(short = 'n', long = "lines", default_value_t = 0)]
    pub lines: usize,
}

impl Cli {
    /// Names of the codecs enabled by flags. Column order is decided by
    /// the built-in table, not by this list.
    pub fn enabled_codecs(&self) -> Vec<&'static str> {
        let flags = [
            ("int8", self.int8),
            ("uint8", self.uint8),
            ("int16", self.int16),
            ("uint16", self.uint16),
            ("int32", self.int32),
            ("uint32", self.uint32),
            ("float32", self.float32),
            ("int64", self.int64),
            ("uint64", self.uint64),
            ("float64", self.float64),
            ("hex", self.hex),
            ("ascii", self.ascii),
            ("utf8", self.utf8),
        ];
        flags
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| *name)
            .collect()
    }
}
