use crate::chunker::Window;
use crate::decoder::CodecState;
use crate::width::column_width;
use bytelens_types::RunConfig;

/// Header line plus the dash rule that underlines it. Each codec name is
/// padded to the same column width its data will occupy.
pub fn render_header(config: &RunConfig) -> (String, String) {
    let columns: Vec<String> = config
        .codecs
        .iter()
        .map(|spec| {
            let width = column_width(spec, config.row_width);
            format!("{:<width$}", spec.name)
        })
        .collect();
    let header = columns.join(" ");
    let rule = "-".repeat(header.chars().count());
    (header, rule)
}

/// One output line for one window: every active codec's padded column,
/// joined by single spaces, in configured order.
pub fn render_row(codecs: &mut [CodecState], window: &Window, row_width: usize) -> String {
    codecs
        .iter_mut()
        .map(|codec| codec.decode_window(&window.bytes, row_width, window.is_last))
        .collect::<Vec<_>>()
        .join(" ")
}
