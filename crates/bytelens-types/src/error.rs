use std::fmt;

/// Result type for bytelens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or driving a run
#[derive(Debug)]
pub enum Error {
    /// Row width was not a positive multiple of 8
    InvalidRowWidth(usize),
    /// No codec was active after selection
    NoCodecs,
    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRowWidth(width) => {
                write!(f, "width must be a positive multiple of 8 (got {})", width)
            }
            Error::NoCodecs => write!(f, "at least one codec must be enabled"),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
