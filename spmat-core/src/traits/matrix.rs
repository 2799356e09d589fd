//! Core matrix abstraction traits
//!
//! These traits describe read access to an integer sparse matrix
//! independently of how the non-zero entries are stored.

/// Core sparse matrix trait for storage-agnostic access
pub trait SparseMatrix {
    /// Get the stored value at the specified position
    ///
    /// Returns `None` when nothing is stored there, which means the
    /// value is zero. Positions outside the declared dimensions are
    /// not an error.
    fn get_element(&self, row: i64, col: i64) -> Option<i64>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Get the value at the specified position, treating absence as zero
    fn value_at(&self, row: i64, col: i64) -> i64 {
        self.get_element(row, col).unwrap_or(0)
    }

    /// Fraction of declared cells holding a non-zero value
    fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let cells = rows as f64 * cols as f64;
        if cells == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / cells
        }
    }
}
