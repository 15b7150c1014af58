//! Bordered 2x2 block partitioning
//!
//! Splits a compressed matrix at a pivot `(r, c)` into
//!
//! ```text
//! | a11 | a12 |
//! |-----+-----|
//! | a21 | a22 |
//! ```
//!
//! and patches the four blocks back into one matrix.

use csblock_core::{validate_split, CsError, CsMatrix, CscMatrix, Kernel, Result};
use tracing::debug;

use crate::engine::BlockEngine;

/// The four blocks of a 2x2 partition
#[derive(Debug, Clone, PartialEq)]
pub struct Blocks {
    /// Top-left, `r x c`
    pub a11: CscMatrix,
    /// Top-right, `r x (n - c)`
    pub a12: CscMatrix,
    /// Bottom-left, `(m - r) x c`
    pub a21: CscMatrix,
    /// Bottom-right, `(m - r) x (n - c)`
    pub a22: CscMatrix,
}

impl Blocks {
    /// Shape of the matrix the blocks assemble into.
    ///
    /// Fails with `DimensionMismatch` when the block shapes do not line up.
    pub fn combined_shape(&self) -> Result<(usize, usize)> {
        let top = self.a11.nrows();
        let bottom = self.a21.nrows();
        let left = self.a11.ncols();
        let right = self.a12.ncols();

        if self.a12.nrows() != top
            || self.a22.nrows() != bottom
            || self.a21.ncols() != left
            || self.a22.ncols() != right
        {
            return Err(CsError::DimensionMismatch);
        }

        Ok((top + bottom, left + right))
    }
}

impl<K: Kernel> BlockEngine<K> {
    /// Split `a` into four blocks at pivot row `r` and pivot column `c`.
    ///
    /// Both halves of each dimension must be non-empty.
    pub fn split(&self, a: &CsMatrix, r: usize, c: usize) -> Result<Blocks> {
        let (m, n) = (a.nrows(), a.ncols());
        validate_split(m, n, r, c)?;
        debug!(m, n, r, c, "splitting into 2x2 blocks");

        Ok(Blocks {
            a11: self.clip(a, 0, 0, r, c)?,
            a12: self.clip(a, 0, c, r, n - c)?,
            a21: self.clip(a, r, 0, m - r, c)?,
            a22: self.clip(a, r, c, m - r, n - c)?,
        })
    }

    /// Patch four blocks into a fresh compressed matrix
    pub fn assemble(&self, blocks: &Blocks) -> Result<CscMatrix> {
        let (m, n) = blocks.combined_shape()?;
        let (r, c) = (blocks.a11.nrows(), blocks.a11.ncols());

        let whole = self.skeleton_compressed(m, n);
        let whole = self.patch(&whole, &blocks.a11, 0, 0, 1.0)?;
        let whole = self.patch(&whole, &blocks.a22, r, c, 1.0)?;
        let whole = self.patch(&whole, &blocks.a21, r, 0, 1.0)?;
        self.patch(&whole, &blocks.a12, 0, c, 1.0)
    }
}
