//! Dual-representation sparse matrix model
//!
//! A matrix lives either in triplet (coordinate) form or in compressed-column
//! form. The two are variants of [`CsMatrix`], so code that needs one specific
//! representation takes [`TripletMatrix`] or [`CscMatrix`] directly.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{CsError, Result};
use crate::traits::SparseMatrix;

/// Coordinate-form matrix: an unordered list of `(row, col, value)` entries.
///
/// Duplicate positions are allowed and count additively. `nzmax` is the
/// logical capacity; it grows by doubling when an insert finds it full.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TripletParts"))]
pub struct TripletMatrix {
    nrows: usize,
    ncols: usize,
    nzmax: usize,
    row_idx: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl TripletMatrix {
    /// Create an empty triplet matrix with room for `nzmax` entries
    pub fn with_capacity(nrows: usize, ncols: usize, nzmax: usize) -> Self {
        let nzmax = nzmax.max(1);
        Self {
            nrows,
            ncols,
            nzmax,
            row_idx: Vec::with_capacity(nzmax),
            col_idx: Vec::with_capacity(nzmax),
            values: Vec::with_capacity(nzmax),
        }
    }

    /// Build from parallel entry arrays, validating every index
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        row_idx: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if row_idx.len() != col_idx.len() || row_idx.len() != values.len() {
            return Err(CsError::CorruptedData);
        }
        if row_idx.iter().any(|&r| r >= nrows) || col_idx.iter().any(|&c| c >= ncols) {
            return Err(CsError::IndexOutOfBounds);
        }

        Ok(Self {
            nrows,
            ncols,
            nzmax: values.len(),
            row_idx,
            col_idx,
            values,
        })
    }

    /// Append one entry, doubling the capacity when full
    pub fn push(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(CsError::IndexOutOfBounds);
        }

        if self.values.len() >= self.nzmax {
            let grown = (self.nzmax * 2).max(1);
            let extra = grown - self.values.len();
            self.row_idx.reserve_exact(extra);
            self.col_idx.reserve_exact(extra);
            self.values.reserve_exact(extra);
            self.nzmax = grown;
        }

        self.row_idx.push(row);
        self.col_idx.push(col);
        self.values.push(value);
        Ok(())
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Logical capacity
    pub fn nzmax(&self) -> usize {
        self.nzmax
    }

    /// Number of active entries, duplicates counted separately
    pub fn nz(&self) -> usize {
        self.values.len()
    }

    pub fn row_indices(&self) -> &[usize] {
        &self.row_idx
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_idx
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access to the values; indices stay fixed
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Iterate entries in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.row_idx
            .iter()
            .zip(self.col_idx.iter())
            .zip(self.values.iter())
            .map(|((&r, &c), &v)| (r, c, v))
    }
}

/// Compressed sparse column matrix.
///
/// Column `j` owns positions `col_ptr[j]..col_ptr[j + 1]` of the parallel
/// `row_idx` and `values` arrays. Rows inside a column need not be sorted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CscParts"))]
pub struct CscMatrix {
    nrows: usize,
    ncols: usize,
    nzmax: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CscMatrix {
    /// Create an all-empty compressed matrix with room for `nzmax` entries
    pub fn with_capacity(nrows: usize, ncols: usize, nzmax: usize) -> Self {
        let nzmax = nzmax.max(1);
        Self {
            nrows,
            ncols,
            nzmax,
            col_ptr: vec![0; ncols + 1],
            row_idx: Vec::with_capacity(nzmax),
            values: Vec::with_capacity(nzmax),
        }
    }

    /// Build from raw compressed arrays, validating the column layout
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        col_ptr: Vec<usize>,
        row_idx: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let ptr_len = ncols.checked_add(1).ok_or(CsError::CorruptedData)?;
        if col_ptr.len() != ptr_len || col_ptr[0] != 0 {
            return Err(CsError::CorruptedData);
        }
        if col_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(CsError::CorruptedData);
        }
        if row_idx.len() != values.len() || col_ptr[ncols] != row_idx.len() {
            return Err(CsError::CorruptedData);
        }
        if row_idx.iter().any(|&r| r >= nrows) {
            return Err(CsError::IndexOutOfBounds);
        }

        Ok(Self {
            nrows,
            ncols,
            nzmax: values.len().max(1),
            col_ptr,
            row_idx,
            values,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Logical capacity
    pub fn nzmax(&self) -> usize {
        self.nzmax
    }

    /// Number of stored entries (`col_ptr[n]`)
    pub fn nnz(&self) -> usize {
        self.col_ptr[self.ncols]
    }

    pub fn col_ptr(&self) -> &[usize] {
        &self.col_ptr
    }

    pub fn row_indices(&self) -> &[usize] {
        &self.row_idx
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access to the values; the sparsity pattern stays fixed
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Stored `(row, value)` pairs of column `col`
    pub fn col(&self, col: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let (start, end) = if col < self.ncols {
            (self.col_ptr[col], self.col_ptr[col + 1])
        } else {
            (0, 0)
        };
        self.row_idx[start..end]
            .iter()
            .zip(self.values[start..end].iter())
            .map(|(&r, &v)| (r, v))
    }

    /// Iterate `(row, col, value)` column by column
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.ncols).flat_map(move |j| self.col(j).map(move |(r, v)| (r, j, v)))
    }

    /// Maximum absolute column sum
    pub fn norm1(&self) -> f64 {
        (0..self.ncols)
            .map(|j| self.col(j).map(|(_, v)| magnitude(v)).sum::<f64>())
            .fold(0.0, f64::max)
    }
}

/// A sparse matrix in exactly one of its two representations
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CsMatrix {
    Triplet(TripletMatrix),
    Compressed(CscMatrix),
}

impl CsMatrix {
    pub fn nrows(&self) -> usize {
        match self {
            CsMatrix::Triplet(t) => t.nrows(),
            CsMatrix::Compressed(c) => c.nrows(),
        }
    }

    pub fn ncols(&self) -> usize {
        match self {
            CsMatrix::Triplet(t) => t.ncols(),
            CsMatrix::Compressed(c) => c.ncols(),
        }
    }

    pub fn nzmax(&self) -> usize {
        match self {
            CsMatrix::Triplet(t) => t.nzmax(),
            CsMatrix::Compressed(c) => c.nzmax(),
        }
    }

    /// Number of stored entries in either form
    pub fn stored(&self) -> usize {
        match self {
            CsMatrix::Triplet(t) => t.nz(),
            CsMatrix::Compressed(c) => c.nnz(),
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, CsMatrix::Compressed(_))
    }

    pub fn as_compressed(&self) -> Result<&CscMatrix> {
        match self {
            CsMatrix::Compressed(c) => Ok(c),
            CsMatrix::Triplet(_) => Err(CsError::InvalidRepresentation),
        }
    }

    pub fn as_triplet(&self) -> Result<&TripletMatrix> {
        match self {
            CsMatrix::Triplet(t) => Ok(t),
            CsMatrix::Compressed(_) => Err(CsError::InvalidRepresentation),
        }
    }

    pub fn into_compressed(self) -> Result<CscMatrix> {
        match self {
            CsMatrix::Compressed(c) => Ok(c),
            CsMatrix::Triplet(_) => Err(CsError::InvalidRepresentation),
        }
    }

    pub fn into_triplet(self) -> Result<TripletMatrix> {
        match self {
            CsMatrix::Triplet(t) => Ok(t),
            CsMatrix::Compressed(_) => Err(CsError::InvalidRepresentation),
        }
    }

    /// Iterate all stored `(row, col, value)` entries
    pub fn iter(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_> {
        match self {
            CsMatrix::Triplet(t) => Box::new(t.iter()),
            CsMatrix::Compressed(c) => Box::new(c.iter()),
        }
    }

    /// Stored entries keyed by position, duplicates summed
    pub fn content(&self) -> BTreeMap<(usize, usize), f64> {
        content_of(self.iter())
    }
}

/// Serialized triplet fields, checked before they become a [`TripletMatrix`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TripletParts {
    nrows: usize,
    ncols: usize,
    nzmax: usize,
    row_idx: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<TripletParts> for TripletMatrix {
    type Error = CsError;

    fn try_from(raw: TripletParts) -> Result<Self> {
        let mut t = TripletMatrix::from_parts(raw.nrows, raw.ncols, raw.row_idx, raw.col_idx, raw.values)?;
        t.nzmax = stored_capacity(raw.nzmax, t.nz())?;
        Ok(t)
    }
}

/// Serialized compressed fields, checked before they become a [`CscMatrix`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CscParts {
    nrows: usize,
    ncols: usize,
    nzmax: usize,
    col_ptr: Vec<usize>,
    row_idx: Vec<usize>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<CscParts> for CscMatrix {
    type Error = CsError;

    fn try_from(raw: CscParts) -> Result<Self> {
        let mut c = CscMatrix::from_parts(raw.nrows, raw.ncols, raw.col_ptr, raw.row_idx, raw.values)?;
        c.nzmax = stored_capacity(raw.nzmax, c.nnz())?;
        Ok(c)
    }
}

/// A capacity below the entry count is corrupt
#[cfg(feature = "serde")]
fn stored_capacity(nzmax: usize, entries: usize) -> Result<usize> {
    if nzmax < entries {
        return Err(CsError::CorruptedData);
    }
    Ok(nzmax)
}

impl From<TripletMatrix> for CsMatrix {
    fn from(t: TripletMatrix) -> Self {
        CsMatrix::Triplet(t)
    }
}

impl From<CscMatrix> for CsMatrix {
    fn from(c: CscMatrix) -> Self {
        CsMatrix::Compressed(c)
    }
}

fn content_of(entries: impl Iterator<Item = (usize, usize, f64)>) -> BTreeMap<(usize, usize), f64> {
    let mut map = BTreeMap::new();
    for (r, c, v) in entries {
        *map.entry((r, c)).or_insert(0.0) += v;
    }
    map
}

// `f64::abs` lives in std
fn magnitude(v: f64) -> f64 {
    f64::from_bits(v.to_bits() & !(1u64 << 63))
}

/// Largest absolute entry-wise difference between two matrices.
///
/// Positions stored in only one matrix compare against zero. Returns `None`
/// when the shapes differ.
pub fn max_abs_difference(a: &CsMatrix, b: &CsMatrix) -> Option<f64> {
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return None;
    }

    let lhs = a.content();
    let mut rhs = b.content();
    let mut worst = 0.0f64;

    for (pos, v) in lhs {
        let other = rhs.remove(&pos).unwrap_or(0.0);
        worst = worst.max(magnitude(v - other));
    }
    for (_, v) in rhs {
        worst = worst.max(magnitude(v));
    }

    Some(worst)
}

impl SparseMatrix for TripletMatrix {
    type Element = f64;

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.iter()
            .filter(|&(r, c, _)| r == row && c == col)
            .map(|(_, _, v)| v)
            .reduce(|acc, v| acc + v)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        self.nz()
    }
}

impl SparseMatrix for CscMatrix {
    type Element = f64;

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.col(col)
            .filter(|&(r, _)| r == row)
            .map(|(_, v)| v)
            .reduce(|acc, v| acc + v)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        CscMatrix::nnz(self)
    }
}

impl SparseMatrix for CsMatrix {
    type Element = f64;

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        match self {
            CsMatrix::Triplet(t) => t.get_element(row, col),
            CsMatrix::Compressed(c) => c.get_element(row, col),
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn nnz(&self) -> usize {
        self.stored()
    }
}
