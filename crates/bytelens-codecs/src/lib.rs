//! Built-in codecs: the table of byte-to-text transformations the
//! viewer can run side by side, and one decode implementation per kind.

mod ascii;
mod decode;
mod hex;
mod numeric;
mod table;
mod utf8;

pub use decode::Decode;
pub use table::{CODECS, DEFAULT_CODECS, codec_by_name, select};
