//! Line parsers for the Matrix Market coordinate format
//!
//! Each function handles one line of text and performs no I/O, so the
//! loader can feed it lines from a buffered reader or a memory map alike.

use crate::format::constants::{BANNER, COMMENT, OBJECT_MATRIX};
use crate::format::{MmField, MmFormat, MmSymmetry, MmTypecode};
use crate::CsError;

/// Parse the `%%MatrixMarket matrix <format> <field> <symmetry>` banner
pub fn parse_banner(line: &str) -> Result<MmTypecode, CsError> {
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        Some(tag) if tag.eq_ignore_ascii_case(BANNER) => {}
        _ => return Err(CsError::InvalidBanner),
    }

    let object = tokens.next().ok_or(CsError::InvalidBanner)?;
    if !object.eq_ignore_ascii_case(OBJECT_MATRIX) {
        return Err(CsError::UnsupportedType);
    }

    let format = tokens
        .next()
        .and_then(MmFormat::from_tag)
        .ok_or(CsError::InvalidBanner)?;
    let field = tokens
        .next()
        .and_then(MmField::from_tag)
        .ok_or(CsError::InvalidBanner)?;
    let symmetry = tokens
        .next()
        .and_then(MmSymmetry::from_tag)
        .ok_or(CsError::InvalidBanner)?;

    Ok(MmTypecode::new(format, field, symmetry))
}

/// Whether a line carries no data (comment or whitespace only)
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(COMMENT)
}

/// Parse the coordinate size line `rows cols nonzeros`
pub fn parse_size_line(line: &str) -> Result<(usize, usize, usize), CsError> {
    let mut tokens = line.split_whitespace();
    let mut next = || -> Result<usize, CsError> {
        tokens
            .next()
            .ok_or(CsError::InvalidSizeLine)?
            .parse::<usize>()
            .map_err(|_| CsError::InvalidSizeLine)
    };

    let rows = next()?;
    let cols = next()?;
    let nnz = next()?;

    if tokens.next().is_some() {
        return Err(CsError::InvalidSizeLine);
    }

    Ok((rows, cols, nnz))
}

/// Parse one `row col [value]` entry into 0-based coordinates.
///
/// Indices in the file are 1-based; 0 and anything past `rows`/`cols` is
/// rejected. Pattern entries carry the value `1.0`.
pub fn parse_entry_line(
    line: &str,
    field: MmField,
    rows: usize,
    cols: usize,
) -> Result<(usize, usize, f64), CsError> {
    let mut tokens = line.split_whitespace();

    let row = parse_index(tokens.next(), rows)?;
    let col = parse_index(tokens.next(), cols)?;

    let value = match field {
        MmField::Pattern => 1.0,
        MmField::Real | MmField::Integer => tokens
            .next()
            .ok_or(CsError::InvalidEntry)?
            .parse::<f64>()
            .map_err(|_| CsError::InvalidEntry)?,
        MmField::Complex => return Err(CsError::UnsupportedType),
    };

    Ok((row, col, value))
}

fn parse_index(token: Option<&str>, bound: usize) -> Result<usize, CsError> {
    let one_based = token
        .ok_or(CsError::InvalidEntry)?
        .parse::<usize>()
        .map_err(|_| CsError::InvalidEntry)?;

    if one_based == 0 || one_based > bound {
        return Err(CsError::IndexOutOfBounds);
    }

    Ok(one_based - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_banner() {
        let code = parse_banner("%%MatrixMarket matrix coordinate real general").unwrap();
        assert_eq!(
            code,
            MmTypecode::new(MmFormat::Coordinate, MmField::Real, MmSymmetry::General)
        );
        assert!(code.is_sparse());
        assert!(!code.is_complex());

        let code = parse_banner("%%MatrixMarket MATRIX Coordinate Pattern Symmetric").unwrap();
        assert_eq!(code.field, MmField::Pattern);
        assert_eq!(code.symmetry, MmSymmetry::Symmetric);

        let code = parse_banner("%%MatrixMarket matrix coordinate complex hermitian").unwrap();
        assert!(code.is_complex());

        // Invalid cases
        assert_eq!(parse_banner(""), Err(CsError::InvalidBanner));
        assert_eq!(parse_banner("% just a comment"), Err(CsError::InvalidBanner));
        assert_eq!(
            parse_banner("%%MatrixMarket matrix coordinate real"),
            Err(CsError::InvalidBanner)
        );
        assert_eq!(
            parse_banner("%%MatrixMarket matrix sparse real general"),
            Err(CsError::InvalidBanner)
        );
        assert_eq!(
            parse_banner("%%MatrixMarket vector coordinate real general"),
            Err(CsError::UnsupportedType)
        );
    }

    #[test]
    fn test_is_skippable() {
        assert!(is_skippable(""));
        assert!(is_skippable("   "));
        assert!(is_skippable("% comment"));
        assert!(is_skippable("  %indented comment"));
        assert!(!is_skippable("3 3 6"));
    }

    #[test]
    fn test_parse_size_line() {
        assert_eq!(parse_size_line("3 3 6"), Ok((3, 3, 6)));
        assert_eq!(parse_size_line("  10\t20   0 "), Ok((10, 20, 0)));

        // Invalid cases
        assert_eq!(parse_size_line("3 3"), Err(CsError::InvalidSizeLine));
        assert_eq!(parse_size_line("3 3 6 1"), Err(CsError::InvalidSizeLine));
        assert_eq!(parse_size_line("3 -3 6"), Err(CsError::InvalidSizeLine));
        assert_eq!(parse_size_line("a b c"), Err(CsError::InvalidSizeLine));
    }

    #[test]
    fn test_parse_entry_line() {
        assert_eq!(
            parse_entry_line("1 1 2.5", MmField::Real, 3, 3),
            Ok((0, 0, 2.5))
        );
        assert_eq!(
            parse_entry_line("3 2 -1.25e-3", MmField::Real, 3, 3),
            Ok((2, 1, -1.25e-3))
        );
        assert_eq!(
            parse_entry_line("2 3 7", MmField::Integer, 3, 3),
            Ok((1, 2, 7.0))
        );
        assert_eq!(
            parse_entry_line("2 3", MmField::Pattern, 3, 3),
            Ok((1, 2, 1.0))
        );

        // Invalid cases
        assert_eq!(
            parse_entry_line("0 1 1.0", MmField::Real, 3, 3),
            Err(CsError::IndexOutOfBounds)
        );
        assert_eq!(
            parse_entry_line("4 1 1.0", MmField::Real, 3, 3),
            Err(CsError::IndexOutOfBounds)
        );
        assert_eq!(
            parse_entry_line("1 1", MmField::Real, 3, 3),
            Err(CsError::InvalidEntry)
        );
        assert_eq!(
            parse_entry_line("1 x 1.0", MmField::Real, 3, 3),
            Err(CsError::InvalidEntry)
        );
        assert_eq!(
            parse_entry_line("1 1 1.0 0.5", MmField::Complex, 3, 3),
            Err(CsError::UnsupportedType)
        );
    }
}
