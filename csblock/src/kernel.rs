//! Reference compressed-column kernel
//!
//! A plain implementation of the [`Kernel`] contract: counting-sort
//! compression with duplicate summation, and column-scatter scaled addition
//! and multiplication. Output columns always hold rows in ascending order.

use csblock_core::{CsError, CscMatrix, Kernel, Result, TripletMatrix};

/// Default kernel used by [`crate::BlockEngine`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CsKernel;

impl Kernel for CsKernel {
    fn compress(&self, t: &TripletMatrix) -> Result<CscMatrix> {
        let ncols = t.ncols();
        let nz = t.nz();

        // Bucket entries by column
        let mut bucket_ptr = vec![0usize; ncols + 1];
        for &col in t.col_indices() {
            bucket_ptr[col + 1] += 1;
        }
        for j in 0..ncols {
            bucket_ptr[j + 1] += bucket_ptr[j];
        }

        let mut cursor = bucket_ptr[..ncols].to_vec();
        let mut bucket = vec![(0usize, 0.0f64); nz];
        for (row, col, value) in t.iter() {
            bucket[cursor[col]] = (row, value);
            cursor[col] += 1;
        }

        // Sort each column by row and fold duplicates together
        let mut col_ptr = Vec::with_capacity(ncols + 1);
        let mut row_idx = Vec::with_capacity(nz);
        let mut values = Vec::with_capacity(nz);
        col_ptr.push(0);

        for j in 0..ncols {
            let column = &mut bucket[bucket_ptr[j]..bucket_ptr[j + 1]];
            column.sort_by_key(|&(row, _)| row);

            let start = row_idx.len();
            for &(row, value) in column.iter() {
                if row_idx.len() > start && row_idx.last() == Some(&row) {
                    if let Some(last) = values.last_mut() {
                        *last += value;
                    }
                } else {
                    row_idx.push(row);
                    values.push(value);
                }
            }
            col_ptr.push(row_idx.len());
        }

        CscMatrix::from_parts(t.nrows(), ncols, col_ptr, row_idx, values)
    }

    fn add(&self, a: &CscMatrix, b: &CscMatrix, alpha: f64, beta: f64) -> Result<CscMatrix> {
        if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
            return Err(CsError::DimensionMismatch);
        }

        let mut acc = ColumnAccumulator::new(a.nrows(), a.ncols(), a.nnz() + b.nnz());
        for j in 0..a.ncols() {
            for (row, value) in a.col(j) {
                acc.scatter(j, row, alpha * value);
            }
            for (row, value) in b.col(j) {
                acc.scatter(j, row, beta * value);
            }
            acc.finish_column();
        }

        acc.into_matrix()
    }

    fn multiply(&self, a: &CscMatrix, b: &CscMatrix) -> Result<CscMatrix> {
        if a.ncols() != b.nrows() {
            return Err(CsError::DimensionMismatch);
        }

        let mut acc = ColumnAccumulator::new(a.nrows(), b.ncols(), a.nnz() + b.nnz());
        for j in 0..b.ncols() {
            for (k, b_kj) in b.col(j) {
                for (row, a_ik) in a.col(k) {
                    acc.scatter(j, row, a_ik * b_kj);
                }
            }
            acc.finish_column();
        }

        acc.into_matrix()
    }
}

/// Dense-marker workspace that builds a compressed matrix one column at a time
struct ColumnAccumulator {
    nrows: usize,
    ncols: usize,
    /// Column that last touched each row, `usize::MAX` when untouched
    mark: Vec<usize>,
    /// Position of each row's entry in the current column
    slot: Vec<usize>,
    col_ptr: Vec<usize>,
    row_idx: Vec<usize>,
    values: Vec<f64>,
}

impl ColumnAccumulator {
    fn new(nrows: usize, ncols: usize, capacity: usize) -> Self {
        let mut col_ptr = Vec::with_capacity(ncols + 1);
        col_ptr.push(0);
        Self {
            nrows,
            ncols,
            mark: vec![usize::MAX; nrows],
            slot: vec![0; nrows],
            col_ptr,
            row_idx: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    fn scatter(&mut self, col: usize, row: usize, value: f64) {
        if self.mark[row] == col {
            self.values[self.slot[row]] += value;
        } else {
            self.mark[row] = col;
            self.slot[row] = self.row_idx.len();
            self.row_idx.push(row);
            self.values.push(value);
        }
    }

    fn finish_column(&mut self) {
        let start = self.col_ptr.last().copied().unwrap_or(0);
        let end = self.row_idx.len();

        let mut column: Vec<(usize, f64)> = self.row_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
            .collect();
        column.sort_by_key(|&(row, _)| row);
        for (offset, (row, value)) in column.into_iter().enumerate() {
            self.row_idx[start + offset] = row;
            self.values[start + offset] = value;
        }

        self.col_ptr.push(end);
    }

    fn into_matrix(self) -> Result<CscMatrix> {
        CscMatrix::from_parts(self.nrows, self.ncols, self.col_ptr, self.row_idx, self.values)
    }
}
