//! Hash-map backed sparse integer matrix
//!
//! Only non-zero values are stored, keyed by their `(row, col)`
//! coordinate. Every mutation goes through [`CooMatrix::set`], which
//! removes a coordinate instead of storing a zero.

use hashbrown::HashMap;
use spmat_core::{Dimensions, Entry, SparseMatrix};

/// Sparse integer matrix in coordinate form
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "crate::json::MatrixDocument", from = "crate::json::MatrixDocument")
)]
pub struct CooMatrix {
    rows: usize,
    cols: usize,
    values: HashMap<(i64, i64), i64>,
}

impl CooMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: HashMap::new(),
        }
    }

    /// Build a matrix from entries, routing each through [`CooMatrix::set`]
    ///
    /// Later entries for the same coordinate overwrite earlier ones.
    pub fn from_entries<I>(dimensions: Dimensions, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut matrix = Self::new(dimensions.rows, dimensions.cols);
        for entry in entries {
            matrix.set(entry.row, entry.col, entry.value);
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Declared shape of the matrix
    pub fn shape(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Value at a coordinate, zero when nothing is stored
    pub fn get(&self, row: i64, col: i64) -> i64 {
        self.values.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Store a value, or remove the coordinate when the value is zero
    pub fn set(&mut self, row: i64, col: i64, value: i64) {
        if value != 0 {
            self.values.insert((row, col), value);
        } else {
            self.values.remove(&(row, col));
        }
    }

    /// True when no non-zero value is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.values
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// Stored entries sorted by row, then column
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable_by_key(Entry::key);
        entries
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.values.keys().copied()
    }
}

impl SparseMatrix for CooMatrix {
    fn get_element(&self, row: i64, col: i64) -> Option<i64> {
        self.values.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

/// Equal when dimensions and stored entry sets match
impl PartialEq for CooMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.values == other.values
    }
}

impl Eq for CooMatrix {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CooMatrix {
        CooMatrix::from_entries(
            Dimensions::new(3, 3),
            [
                Entry::new(0, 0, 1),
                Entry::new(0, 2, 4),
                Entry::new(2, 1, -3),
                Entry::new(1, 1, 0),
            ],
        )
    }

    #[test]
    fn test_get_defaults_to_zero() {
        let matrix = sample();
        assert_eq!(matrix.get(0, 0), 1);
        assert_eq!(matrix.get(2, 1), -3);
        assert_eq!(matrix.get(1, 1), 0);
        // Coordinates outside the declared shape are not an error
        assert_eq!(matrix.get(100, -5), 0);
        assert_eq!(matrix.get_element(1, 1), None);
    }

    #[test]
    fn test_zero_is_never_stored() {
        let mut matrix = sample();
        assert_eq!(matrix.nnz(), 3);

        matrix.set(0, 0, 0);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.get_element(0, 0), None);
        assert_eq!(matrix.nnz(), 2);

        // Removing an absent coordinate is a no-op
        matrix.set(0, 0, 0);
        matrix.set(5, 5, 0);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_set_overwrites() {
        let mut matrix = CooMatrix::new(2, 2);
        matrix.set(1, 0, 7);
        matrix.set(1, 0, -2);
        assert_eq!(matrix.get(1, 0), -2);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_entries_sorted() {
        let entries = sample().entries();
        assert_eq!(
            entries,
            vec![
                Entry::new(0, 0, 1),
                Entry::new(0, 2, 4),
                Entry::new(2, 1, -3)
            ]
        );
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = CooMatrix::from_entries(
            Dimensions::new(2, 2),
            [Entry::new(0, 0, 1), Entry::new(1, 1, 2)],
        );
        let b = CooMatrix::from_entries(
            Dimensions::new(2, 2),
            [Entry::new(1, 1, 2), Entry::new(0, 0, 1)],
        );
        assert_eq!(a, b);
        assert_ne!(a, CooMatrix::from_entries(Dimensions::new(2, 3), a.iter()));
    }

    #[test]
    fn test_density() {
        let matrix = sample();
        assert!((matrix.density() - 3.0 / 9.0).abs() < 1e-12);
        assert_eq!(CooMatrix::new(0, 4).density(), 0.0);
    }
}
