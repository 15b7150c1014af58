//! Error types for sparse block operations

/// Errors that can occur while building, converting or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsError {
    /// Window, offset or size outside the matrix
    InvalidArgument,
    /// Matrix is in the other storage representation
    InvalidRepresentation,
    /// Operand shapes do not agree
    DimensionMismatch,
    /// Entry index outside the matrix shape
    IndexOutOfBounds,
    /// Raw arrays violate the storage invariants
    CorruptedData,
    /// Matrix Market banner line is missing or malformed
    InvalidBanner,
    /// Matrix Market type the loader does not handle (complex, array, ...)
    UnsupportedType,
    /// Matrix Market size line is malformed
    InvalidSizeLine,
    /// Matrix Market entry line is malformed
    InvalidEntry,
}

impl core::fmt::Display for CsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            CsError::InvalidArgument => "Invalid argument",
            CsError::InvalidRepresentation => "Matrix is in the wrong storage representation",
            CsError::DimensionMismatch => "Matrix dimensions do not match",
            CsError::IndexOutOfBounds => "Index out of bounds",
            CsError::CorruptedData => "Sparse storage arrays are inconsistent",
            CsError::InvalidBanner => "Invalid Matrix Market banner",
            CsError::UnsupportedType => "Unsupported Matrix Market type",
            CsError::InvalidSizeLine => "Invalid Matrix Market size line",
            CsError::InvalidEntry => "Invalid Matrix Market entry line",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for CsError {}

/// Result type for sparse block operations
pub type Result<T> = core::result::Result<T, CsError>;
