//! Error types for segstrip.

use std::fmt;
use std::io;

/// Result type alias for segstrip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for segstrip operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while presenting a frame.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Segment index outside the configured content.
    IndexOutOfBounds { index: usize, len: usize },
    /// Options that cannot produce a sensible layout.
    InvalidOptions(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "segment index {index} out of bounds for {len} segments")
            }
            Self::InvalidOptions(reason) => write!(f, "invalid options: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Check `index` against a sequence of `len` segments.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}
