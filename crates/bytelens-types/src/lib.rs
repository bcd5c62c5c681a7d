pub mod codec;
pub mod config;
pub mod error;
pub mod glyph;

pub use codec::{CodecKind, CodecSpec, DecodeStep, UnitSize};
pub use config::RunConfig;
pub use error::{Error, Result};
