//! Construction helpers: skeleton, identity, copy and difference

use csblock_core::{CsMatrix, CscMatrix, Kernel, Result};

use crate::engine::BlockEngine;

impl<K: Kernel> BlockEngine<K> {
    /// Allocate an empty `nrows x ncols` matrix.
    ///
    /// A triplet skeleton has no active entries; a compressed skeleton has
    /// every column start at 0.
    pub fn skeleton(&self, nrows: usize, ncols: usize, triplet: bool) -> CsMatrix {
        self.kernel()
            .allocate(nrows, ncols, self.config().skeleton_capacity, triplet)
    }

    /// Empty compressed skeleton, typed
    pub fn skeleton_compressed(&self, nrows: usize, ncols: usize) -> CscMatrix {
        self.kernel()
            .allocate_compressed(nrows, ncols, self.config().skeleton_capacity)
    }

    /// `n x n` identity in compressed form
    pub fn identity(&self, n: usize) -> Result<CscMatrix> {
        let mut t = self.accumulator(n, n);
        for i in 0..n {
            self.kernel().insert_entry(&mut t, i, i, 1.0)?;
        }
        self.compress(&t)
    }

    /// Deep copy with independent storage
    pub fn copy(&self, src: &CsMatrix) -> CsMatrix {
        src.clone()
    }

    /// `a - b`
    pub fn diff(&self, a: &CscMatrix, b: &CscMatrix) -> Result<CscMatrix> {
        self.kernel().add(a, b, 1.0, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csblock_core::{CsError, SparseMatrix};

    #[test]
    fn test_skeleton_shapes() {
        let engine = BlockEngine::new();

        let t = engine.skeleton(3, 4, true);
        assert!(!t.is_compressed());
        assert_eq!(t.dimensions(), (3, 4));
        assert_eq!(t.stored(), 0);
        assert_eq!(t.nzmax(), 1);

        let c = engine.skeleton(3, 4, false);
        let c = c.as_compressed().unwrap();
        assert_eq!(c.col_ptr(), &[0, 0, 0, 0, 0]);
        assert_eq!(c.nnz(), 0);
    }

    #[test]
    fn test_identity() {
        let engine = BlockEngine::new();
        let eye = engine.identity(3).unwrap();

        assert_eq!(eye.dimensions(), (3, 3));
        assert_eq!(eye.nnz(), 3);
        assert_eq!(eye.col_ptr(), &[0, 1, 2, 3]);
        assert_eq!(eye.row_indices(), &[0, 1, 2]);
        assert_eq!(eye.values(), &[1.0, 1.0, 1.0]);

        assert_eq!(engine.identity(0).unwrap().nnz(), 0);
    }

    #[test]
    fn test_diff_shape_mismatch() {
        let engine = BlockEngine::new();
        let a = engine.identity(2).unwrap();
        let b = engine.identity(3).unwrap();
        assert_eq!(engine.diff(&a, &b), Err(CsError::DimensionMismatch));
    }

    #[test]
    fn test_diff_values() {
        let engine = BlockEngine::new();
        let a = engine.identity(2).unwrap();
        let b = CscMatrix::from_parts(2, 2, vec![0, 0, 2], vec![0, 1], vec![5.0, 2.0]).unwrap();

        let d = engine.diff(&a, &b).unwrap();
        assert_eq!(d.get_element(0, 0), Some(1.0));
        assert_eq!(d.get_element(0, 1), Some(-5.0));
        assert_eq!(d.get_element(1, 1), Some(-1.0));
        assert_eq!(d.get_element(1, 0), None);
    }
}
