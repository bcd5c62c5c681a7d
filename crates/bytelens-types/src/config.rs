use crate::codec::CodecSpec;
use crate::error::{Error, Result};

/// Immutable settings for one run, produced by the CLI layer before any
/// output is written.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Active codecs in column order. Never empty after construction.
    pub codecs: Vec<&'static CodecSpec>,
    /// Bytes per row.
    pub row_width: usize,
    /// Maximum rows to emit; 0 means unbounded.
    pub max_rows: usize,
}

impl RunConfig {
    /// Validates the row width (positive multiple of 8) and codec list.
    pub fn new(
        codecs: Vec<&'static CodecSpec>,
        row_width: usize,
        max_rows: usize,
    ) -> Result<Self> {
        if row_width == 0 || row_width % 8 != 0 {
            return Err(Error::InvalidRowWidth(row_width));
        }
        if codecs.is_empty() {
            return Err(Error::NoCodecs);
        }
        Ok(Self {
            codecs,
            row_width,
            max_rows,
        })
    }
}
