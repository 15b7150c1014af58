//! Format-agnostic matrix access

/// Core sparse matrix trait for format-agnostic access
///
/// Implemented by both storage representations and by their sum type.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element;

    /// Get the value stored at the specified position
    ///
    /// Returns `None` if nothing is stored there or the position is out of
    /// bounds. Duplicate entries at one position are summed.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;
}
