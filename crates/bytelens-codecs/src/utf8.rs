//! Stateful UTF-8 codec.
//!
//! The caller hands this codec its carry bytes plus the current window
//! and re-invokes it as long as it makes progress. The classifier only
//! ever inspects the leading bytes; it never looks ahead past what it
//! would consume, so a sequence split across two windows is stitched
//! back together by the carry without loss or duplication.

use bytelens_types::{DecodeStep, glyph};

/// Longest byte length of any UTF-8 sequence.
const MAX_SEQ: usize = 4;

/// Classify the leading bytes of `buf` as exactly one of: a complete
/// character, an unrecoverable run worth one replacement glyph, or an
/// incomplete sequence that is still worth waiting for.
pub(crate) fn decode(buf: &[u8], at_eof: bool) -> DecodeStep {
    let head = &buf[..buf.len().min(MAX_SEQ)];
    match std::str::from_utf8(head) {
        Ok(_) => emit_first_char(head, head.len()),
        Err(e) if e.valid_up_to() > 0 => emit_first_char(head, e.valid_up_to()),
        Err(e) => match e.error_len() {
            // Broken or impossible leading sequence. Swallow every
            // following byte that cannot begin a new sequence so one
            // glyph stands for the whole damaged run.
            Some(bad) => {
                let mut end = bad;
                while end < buf.len() && !is_sequence_start(buf[end]) {
                    end += 1;
                }
                replacement(end)
            }
            // Incomplete but still completable.
            None if at_eof => replacement(head.len()),
            None => DecodeStep::NeedMore,
        },
    }
}

/// Emit the first character of the (already validated) `len`-byte prefix.
fn emit_first_char(head: &[u8], len: usize) -> DecodeStep {
    let first = std::str::from_utf8(&head[..len])
        .ok()
        .and_then(|s| s.chars().next());
    match first {
        Some(c) => DecodeStep::Emit {
            text: glyph::display_char(c).to_string(),
            consumed: c.len_utf8(),
        },
        // The prefix was reported valid and non-empty.
        None => replacement(1),
    }
}

fn replacement(consumed: usize) -> DecodeStep {
    DecodeStep::Emit {
        text: glyph::REPLACEMENT.to_string(),
        consumed,
    }
}

/// Bytes that can begin a well-formed sequence: ASCII or a lead byte in
/// C2..=F4. Continuation bytes and the never-valid C0/C1/F5..FF cannot.
fn is_sequence_start(byte: u8) -> bool {
    byte < 0x80 || (0xC2..=0xF4).contains(&byte)
}
