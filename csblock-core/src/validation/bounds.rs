//! Window and offset validation for block operations
//!
//! Pure checks on shapes and offsets; every addition is overflow-checked so a
//! huge offset can never wrap into a valid-looking window.

use crate::CsError;

/// Validate a clip window `[ri, ri + m) x [ci, ci + n)` inside a
/// `rows x cols` matrix
pub const fn validate_window(
    rows: usize,
    cols: usize,
    ri: usize,
    ci: usize,
    m: usize,
    n: usize,
) -> Result<(), CsError> {
    if m < 1 || n < 1 {
        return Err(CsError::InvalidArgument);
    }
    validate_offset(rows, cols, ri, ci, m, n)
}

/// Validate placing a `pm x pn` block with its top-left corner at `(ri, ci)`
/// inside a `rows x cols` matrix
pub const fn validate_offset(
    rows: usize,
    cols: usize,
    ri: usize,
    ci: usize,
    pm: usize,
    pn: usize,
) -> Result<(), CsError> {
    if ri >= rows || ci >= cols {
        return Err(CsError::InvalidArgument);
    }

    match (ri.checked_add(pm), ci.checked_add(pn)) {
        (Some(row_end), Some(col_end)) if row_end <= rows && col_end <= cols => Ok(()),
        _ => Err(CsError::InvalidArgument),
    }
}

/// Validate a 2x2 split pivot: both halves of each dimension must be
/// non-empty
pub const fn validate_split(rows: usize, cols: usize, r: usize, c: usize) -> Result<(), CsError> {
    if r < 1 || c < 1 || r >= rows || c >= cols {
        return Err(CsError::InvalidArgument);
    }
    Ok(())
}
