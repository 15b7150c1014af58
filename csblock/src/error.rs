//! Errors for loading matrices from text files

use csblock_core::CsError;
use thiserror::Error;

/// Recoverable failure while loading a Matrix Market file.
///
/// No partial matrix is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Memory-mapped contents are not valid UTF-8
    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// First line is not a Matrix Market banner
    #[error("could not process Matrix Market banner: {0:?}")]
    Banner(String),

    /// Banner names a type the loader cannot represent
    #[error("unsupported Matrix Market type: [{0}]")]
    UnsupportedType(String),

    /// Size line is missing or malformed
    #[error("invalid size line: {0:?}")]
    Size(String),

    /// An entry line could not be parsed or lies outside the declared shape
    #[error("line {line}: {reason}")]
    Entry { line: usize, reason: CsError },

    /// File ended before the declared number of entries
    #[error("expected {expected} entries, found {found}")]
    Truncated { expected: usize, found: usize },

    /// Parsed arrays were rejected by the matrix model
    #[error("invalid matrix: {0}")]
    Core(#[from] CsError),
}
