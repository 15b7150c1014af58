//! Matrix Market format constants

/// First token of the banner line
pub const BANNER: &str = "%%MatrixMarket";

/// Leading character of comment lines
pub const COMMENT: char = '%';

/// The only object kind the loader accepts
pub const OBJECT_MATRIX: &str = "matrix";
