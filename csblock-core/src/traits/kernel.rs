//! Sparse primitive kernel contract
//!
//! The block layer never does arithmetic on matrix values itself. It
//! allocates, inserts entries and hands whole matrices to a kernel for
//! compression, scaled addition and multiplication. Releasing a matrix is
//! dropping it.

use crate::error::Result;
use crate::matrix::{CscMatrix, CsMatrix, TripletMatrix};

/// Trait for sparse kernels the block layer builds on
pub trait Kernel {
    /// Allocate an empty triplet matrix with capacity `nzmax`
    fn allocate_triplet(&self, nrows: usize, ncols: usize, nzmax: usize) -> TripletMatrix {
        TripletMatrix::with_capacity(nrows, ncols, nzmax)
    }

    /// Allocate an all-empty compressed matrix with capacity `nzmax`
    fn allocate_compressed(&self, nrows: usize, ncols: usize, nzmax: usize) -> CscMatrix {
        CscMatrix::with_capacity(nrows, ncols, nzmax)
    }

    /// Allocate an empty matrix in the requested representation
    fn allocate(&self, nrows: usize, ncols: usize, nzmax: usize, triplet: bool) -> CsMatrix {
        if triplet {
            self.allocate_triplet(nrows, ncols, nzmax).into()
        } else {
            self.allocate_compressed(nrows, ncols, nzmax).into()
        }
    }

    /// Append one entry to a triplet matrix, growing its capacity as needed
    ///
    /// Fails with `IndexOutOfBounds` when `(row, col)` is outside the shape.
    fn insert_entry(&self, t: &mut TripletMatrix, row: usize, col: usize, value: f64) -> Result<()> {
        t.push(row, col, value)
    }

    /// Convert triplet form to compressed-column form
    ///
    /// Duplicate positions are summed. Rows within each column come out in
    /// ascending order.
    fn compress(&self, t: &TripletMatrix) -> Result<CscMatrix>;

    /// Compute `alpha * a + beta * b`
    ///
    /// Fails with `DimensionMismatch` when the shapes differ.
    fn add(&self, a: &CscMatrix, b: &CscMatrix, alpha: f64, beta: f64) -> Result<CscMatrix>;

    /// Compute the product `a * b`
    ///
    /// Fails with `DimensionMismatch` when `a.ncols() != b.nrows()`.
    fn multiply(&self, a: &CscMatrix, b: &CscMatrix) -> Result<CscMatrix>;
}
