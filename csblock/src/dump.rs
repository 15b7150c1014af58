//! Format-aware debug output
//!
//! Prints the shape, the representation and the raw storage arrays. For a
//! compressed matrix `nz` is reported as `-1` and the column array holds the
//! column starts; for a triplet matrix it holds one column index per entry.

use std::io::{self, Write};

use csblock_core::CsMatrix;

/// Write a labelled dump of `m` to `out`
pub fn dump<W: Write>(m: &CsMatrix, label: &str, out: &mut W) -> io::Result<()> {
    let (kind, nz) = match m {
        CsMatrix::Triplet(t) => ("triplet", t.nz() as i64),
        CsMatrix::Compressed(_) => ("compressed", -1),
    };
    writeln!(
        out,
        "{label} ({kind}): (m, n, nzmax, nz) = ({}, {}, {}, {nz})",
        m.nrows(),
        m.ncols(),
        m.nzmax()
    )?;

    let (cols, col_note, rows, values) = match m {
        CsMatrix::Triplet(t) => (t.col_indices(), "col indices", t.row_indices(), t.values()),
        CsMatrix::Compressed(c) => (c.col_ptr(), "col start indices", c.row_indices(), c.values()),
    };

    writeln!(out, "p[]=[{}] <- {col_note}", join(cols.iter()))?;
    writeln!(out, "i[]=[{}] <- row indices", join(rows.iter()))?;
    writeln!(out, "x[]=[{}]", join(values.iter().map(|v| format!("{v:.6}"))))?;
    Ok(())
}

/// Render a dump into a string
pub fn render(m: &CsMatrix, label: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = dump(m, label, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serialize a matrix to JSON
#[cfg(feature = "serde")]
pub fn to_json(m: &CsMatrix) -> serde_json::Result<String> {
    serde_json::to_string(m)
}

/// Deserialize a matrix from JSON produced by [`to_json`]
#[cfg(feature = "serde")]
pub fn from_json(json: &str) -> serde_json::Result<CsMatrix> {
    serde_json::from_str(json)
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}
