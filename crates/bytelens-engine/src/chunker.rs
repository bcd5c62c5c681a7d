use std::io::Read;

/// One slice of the input, a full `width` bytes except possibly at end
/// of stream. Windows are ephemeral; nothing retains them past the row
/// they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub bytes: Vec<u8>,
    /// No further window will follow this one. Codecs use this to flush
    /// their carry instead of waiting for bytes that will never come.
    pub is_last: bool,
}

/// Pulls fixed-size windows out of a byte source.
///
/// A short read does not end a window early; the chunker keeps reading
/// until the window is full or the source is exhausted, and a trailing
/// fragment shorter than `width` is still delivered with its true
/// length. When a full window leaves end-of-stream undecided the
/// chunker reads one window ahead so every yielded window knows whether
/// it is the last. A non-zero `max_rows` stops iteration without
/// pulling the window after the cap from the source.
pub struct Chunker<R: Read> {
    source: R,
    width: usize,
    max_rows: usize,
    rows: usize,
    pending: Option<Vec<u8>>,
    eof: bool,
    primed: bool,
}

impl<R: Read> Chunker<R> {
    pub fn new(source: R, width: usize, max_rows: usize) -> Self {
        Self {
            source,
            width,
            max_rows,
            rows: 0,
            pending: None,
            eof: false,
            primed: false,
        }
    }

    /// Zero-based index of the next window.
    pub fn rows_yielded(&self) -> usize {
        self.rows
    }

    /// Read up to `width` bytes, retrying short reads until the window
    /// is full or the source is exhausted. `None` once nothing is left.
    fn read_window(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        if self.eof {
            return Ok(None);
        }
        let mut buf = vec![0u8; self.width];
        let mut filled = 0;
        while filled < self.width {
            let n = self.source.read(&mut buf[filled..])?;
            if n == 0 {
                self.eof = true;
                break;
            }
            filled += n;
        }
        if filled == 0 {
            return Ok(None);
        }
        buf.truncate(filled);
        Ok(Some(buf))
    }
}

impl<R: Read> Iterator for Chunker<R> {
    type Item = std::io::Result<Window>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.max_rows != 0 && self.rows == self.max_rows {
            return None;
        }
        if !self.primed {
            self.primed = true;
            self.pending = match self.read_window() {
                Ok(window) => window,
                Err(err) => return Some(Err(err)),
            };
        }
        let bytes = self.pending.take()?;
        self.rows += 1;

        // A short window already saw end of stream. A full one needs a
        // lookahead to decide, unless the row cap makes the answer moot.
        let capped = self.max_rows != 0 && self.rows == self.max_rows;
        let mut is_last = self.eof;
        if !self.eof && !capped {
            self.pending = match self.read_window() {
                Ok(window) => window,
                Err(err) => return Some(Err(err)),
            };
            is_last = self.pending.is_none();
        }

        Some(Ok(Window { bytes, is_last }))
    }
}
