//! Submatrix extraction (clip) and insertion (patch)
//!
//! Both operations are functional: inputs are borrowed, a fresh compressed
//! matrix is returned, and any scratch matrix is a local that drops on every
//! exit path.

use csblock_core::{
    validate_offset, validate_window, CsMatrix, CscMatrix, Kernel, Result, TripletMatrix,
};
use tracing::{debug, trace};

use crate::engine::BlockEngine;

impl<K: Kernel> BlockEngine<K> {
    /// Extract the `m x n` window with top-left corner `(ri, ci)`.
    ///
    /// Works on either representation. Every stored entry of `a` inside
    /// `[ri, ri + m) x [ci, ci + n)` lands at `(row - ri, col - ci)` of the
    /// result; duplicate triplet entries are summed by compression.
    ///
    /// Fails with `InvalidArgument` when the window is empty or does not fit
    /// inside `a`.
    pub fn clip(&self, a: &CsMatrix, ri: usize, ci: usize, m: usize, n: usize) -> Result<CscMatrix> {
        match a {
            CsMatrix::Triplet(t) => self.clip_triplet(t, ri, ci, m, n),
            CsMatrix::Compressed(c) => self.clip_compressed(c, ri, ci, m, n),
        }
    }

    /// Clip from a triplet matrix, testing every active entry
    pub fn clip_triplet(
        &self,
        a: &TripletMatrix,
        ri: usize,
        ci: usize,
        m: usize,
        n: usize,
    ) -> Result<CscMatrix> {
        validate_window(a.nrows(), a.ncols(), ri, ci, m, n)?;
        self.gather_window(a.iter(), ri, ci, m, n)
    }

    /// Clip from a compressed matrix, scanning only the window's columns
    pub fn clip_compressed(
        &self,
        a: &CscMatrix,
        ri: usize,
        ci: usize,
        m: usize,
        n: usize,
    ) -> Result<CscMatrix> {
        validate_window(a.nrows(), a.ncols(), ri, ci, m, n)?;
        let entries = (ci..ci + n)
            .flat_map(move |j| a.col(j).map(move |(row, value)| (row, j, value)));
        self.gather_window(entries, ri, ci, m, n)
    }

    /// Translate the entries inside a validated window into a new matrix
    fn gather_window(
        &self,
        entries: impl Iterator<Item = (usize, usize, f64)>,
        ri: usize,
        ci: usize,
        m: usize,
        n: usize,
    ) -> Result<CscMatrix> {
        let rows = ri..ri + m;
        let cols = ci..ci + n;
        let mut acc = self.accumulator(m, n);

        for (row, col, value) in entries {
            if rows.contains(&row) && cols.contains(&col) {
                self.kernel().insert_entry(&mut acc, row - ri, col - ci, value)?;
            }
        }

        debug!(ri, ci, m, n, picked = acc.nz(), "clipped window");
        self.compress(&acc)
    }

    /// Return `a + k * P`, with `p` placed so that its `(0, 0)` sits at
    /// `(ri, ci)` of `a`.
    ///
    /// Positions of `a` outside the block are unchanged. Fails with
    /// `InvalidArgument` when `p` does not fit inside `a` at that offset.
    pub fn patch(&self, a: &CscMatrix, p: &CscMatrix, ri: usize, ci: usize, k: f64) -> Result<CscMatrix> {
        validate_offset(a.nrows(), a.ncols(), ri, ci, p.nrows(), p.ncols())?;

        if ri == 0 && ci == 0 && a.nrows() == p.nrows() && a.ncols() == p.ncols() {
            debug!(k, "patch covers the whole matrix");
            return self.kernel().add(a, p, 1.0, k);
        }

        let mut embedded = self.kernel().allocate_triplet(a.nrows(), a.ncols(), p.nzmax());
        for j in 0..p.ncols() {
            for (row, value) in p.col(j) {
                self.kernel().insert_entry(&mut embedded, row + ri, j + ci, value)?;
            }
        }
        let block = self.compress(&embedded)?;
        trace!(nz = block.nnz(), "embedded patch block");

        debug!(ri, ci, m = p.nrows(), n = p.ncols(), k, "patched block");
        self.kernel().add(a, &block, 1.0, k)
    }

    /// Patch with operands in either representation.
    ///
    /// Fails with `InvalidRepresentation` unless both are compressed.
    pub fn patch_any(&self, a: &CsMatrix, p: &CsMatrix, ri: usize, ci: usize, k: f64) -> Result<CscMatrix> {
        self.patch(a.as_compressed()?, p.as_compressed()?, ri, ci, k)
    }
}
