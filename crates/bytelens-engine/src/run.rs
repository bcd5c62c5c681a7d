use crate::chunker::Chunker;
use crate::decoder::CodecState;
use crate::render::{render_header, render_row};
use bytelens_types::{Result, RunConfig};
use std::io::{Read, Write};

/// Drive one full run: header, dash rule, then one rendered row per
/// window until the source is exhausted or the row cap is reached.
///
/// A read failure other than clean end-of-stream aborts immediately;
/// rows already written stay written.
pub fn run<R: Read, W: Write>(config: &RunConfig, source: R, out: &mut W) -> Result<()> {
    let mut codecs: Vec<CodecState> = config.codecs.iter().copied().map(CodecState::new).collect();

    let (header, rule) = render_header(config);
    writeln!(out, "{header}")?;
    writeln!(out, "{rule}")?;

    for window in Chunker::new(source, config.row_width, config.max_rows) {
        let window = window?;
        let line = render_row(&mut codecs, &window, config.row_width);
        writeln!(out, "{line}")?;
    }
    Ok(())
}
