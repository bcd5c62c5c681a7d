//! Chunked decoding and alignment engine.
//!
//! The pipeline is single-threaded and synchronous: the chunker pulls
//! one window of bytes, every active codec decodes its own view of that
//! window (carrying leftover bytes forward itself), the renderer joins
//! the padded columns into one line, and the driver writes it before the
//! next window is requested.

pub mod chunker;
pub mod decoder;
pub mod render;
mod run;
pub mod width;

pub use chunker::{Chunker, Window};
pub use decoder::CodecState;
pub use render::{render_header, render_row};
pub use run::run;
