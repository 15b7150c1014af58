//! Conversion between compressed and triplet representations

use csblock_core::{CsMatrix, CscMatrix, Kernel, Result, TripletMatrix};
use tracing::trace;

use crate::engine::BlockEngine;

impl<K: Kernel> BlockEngine<K> {
    /// Expand a compressed matrix back into triplet form.
    ///
    /// Fails with `InvalidRepresentation` if `a` is already a triplet matrix.
    pub fn unzip(&self, a: &CsMatrix) -> Result<TripletMatrix> {
        self.unzip_compressed(a.as_compressed()?)
    }

    /// Expand a compressed matrix into one triplet entry per stored entry,
    /// column by column
    pub fn unzip_compressed(&self, a: &CscMatrix) -> Result<TripletMatrix> {
        let mut t = self.kernel().allocate_triplet(a.nrows(), a.ncols(), a.nzmax());

        for j in 0..a.ncols() {
            for (row, value) in a.col(j) {
                self.kernel().insert_entry(&mut t, row, j, value)?;
            }
        }

        trace!(nrows = a.nrows(), ncols = a.ncols(), nz = t.nz(), "unzipped compressed matrix");
        Ok(t)
    }

    /// Return a compressed copy of `a` in whichever form it is stored
    pub fn to_compressed(&self, a: &CsMatrix) -> Result<CscMatrix> {
        match a {
            CsMatrix::Triplet(t) => self.compress(t),
            CsMatrix::Compressed(c) => Ok(c.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csblock_core::CsError;

    #[test]
    fn test_unzip_preserves_entries() {
        let engine = BlockEngine::new();
        let c = CscMatrix::from_parts(2, 3, vec![0, 1, 1, 3], vec![1, 0, 1], vec![4.0, -1.0, 2.0])
            .unwrap();

        let t = engine.unzip(&c.clone().into()).unwrap();
        assert_eq!(t.nrows(), 2);
        assert_eq!(t.ncols(), 3);
        assert_eq!(t.nz(), 3);
        assert_eq!(t.nzmax(), c.nzmax());

        let entries: Vec<_> = t.iter().collect();
        assert_eq!(entries, vec![(1, 0, 4.0), (0, 2, -1.0), (1, 2, 2.0)]);
    }

    #[test]
    fn test_unzip_rejects_triplet() {
        let engine = BlockEngine::new();
        let t: CsMatrix = TripletMatrix::with_capacity(2, 2, 1).into();
        assert_eq!(engine.unzip(&t).err(), Some(CsError::InvalidRepresentation));
    }

    #[test]
    fn test_unzip_empty() {
        let engine = BlockEngine::new();
        let t = engine.unzip_compressed(&CscMatrix::with_capacity(3, 3, 1)).unwrap();
        assert_eq!(t.nz(), 0);
        assert_eq!(engine.compress(&t).unwrap().nnz(), 0);
    }
}
