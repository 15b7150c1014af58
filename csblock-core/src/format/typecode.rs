//! Matrix Market type tags carried on the banner line

/// Storage layout of the file body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MmFormat {
    /// Sparse `row col value` records
    Coordinate,
    /// Dense column-major values
    Array,
}

impl MmFormat {
    /// Parse a banner tag, ignoring ASCII case
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("coordinate") {
            Some(MmFormat::Coordinate)
        } else if tag.eq_ignore_ascii_case("array") {
            Some(MmFormat::Array)
        } else {
            None
        }
    }
}

impl core::fmt::Display for MmFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MmFormat::Coordinate => write!(f, "coordinate"),
            MmFormat::Array => write!(f, "array"),
        }
    }
}

/// Value field of each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MmField {
    Real,
    Integer,
    Complex,
    /// No value column; every listed entry is a structural one
    Pattern,
}

impl MmField {
    /// Parse a banner tag, ignoring ASCII case
    pub fn from_tag(tag: &str) -> Option<Self> {
        // "double" is an old alias some writers still emit
        if tag.eq_ignore_ascii_case("real") || tag.eq_ignore_ascii_case("double") {
            Some(MmField::Real)
        } else if tag.eq_ignore_ascii_case("integer") {
            Some(MmField::Integer)
        } else if tag.eq_ignore_ascii_case("complex") {
            Some(MmField::Complex)
        } else if tag.eq_ignore_ascii_case("pattern") {
            Some(MmField::Pattern)
        } else {
            None
        }
    }
}

impl core::fmt::Display for MmField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MmField::Real => write!(f, "real"),
            MmField::Integer => write!(f, "integer"),
            MmField::Complex => write!(f, "complex"),
            MmField::Pattern => write!(f, "pattern"),
        }
    }
}

/// Symmetry declared for the stored entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MmSymmetry {
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

impl MmSymmetry {
    /// Parse a banner tag, ignoring ASCII case
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("general") {
            Some(MmSymmetry::General)
        } else if tag.eq_ignore_ascii_case("symmetric") {
            Some(MmSymmetry::Symmetric)
        } else if tag.eq_ignore_ascii_case("skew-symmetric") {
            Some(MmSymmetry::SkewSymmetric)
        } else if tag.eq_ignore_ascii_case("hermitian") {
            Some(MmSymmetry::Hermitian)
        } else {
            None
        }
    }
}

impl core::fmt::Display for MmSymmetry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MmSymmetry::General => write!(f, "general"),
            MmSymmetry::Symmetric => write!(f, "symmetric"),
            MmSymmetry::SkewSymmetric => write!(f, "skew-symmetric"),
            MmSymmetry::Hermitian => write!(f, "hermitian"),
        }
    }
}

/// Full type description from a `%%MatrixMarket matrix ...` banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MmTypecode {
    pub format: MmFormat,
    pub field: MmField,
    pub symmetry: MmSymmetry,
}

impl MmTypecode {
    pub const fn new(format: MmFormat, field: MmField, symmetry: MmSymmetry) -> Self {
        Self {
            format,
            field,
            symmetry,
        }
    }

    pub const fn is_sparse(&self) -> bool {
        matches!(self.format, MmFormat::Coordinate)
    }

    /// Complex values or Hermitian symmetry
    pub const fn is_complex(&self) -> bool {
        matches!(self.field, MmField::Complex) || matches!(self.symmetry, MmSymmetry::Hermitian)
    }
}

impl core::fmt::Display for MmTypecode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "matrix {} {} {}", self.format, self.field, self.symmetry)
    }
}
