//! Addition, subtraction and multiplication on stored entries
//!
//! None of the operations materialise dense storage. Values wrap at the
//! `i64` boundary.

use hashbrown::{HashMap, HashSet};
use spmat_core::{Operation, SparseMatrix};
use tracing::debug;

use crate::error::Result;
use crate::matrix::CooMatrix;

impl CooMatrix {
    /// Element-wise sum of two matrices of the same shape
    pub fn add(&self, other: &CooMatrix) -> Result<CooMatrix> {
        self.elementwise(other, Operation::Add, i64::wrapping_add)
    }

    /// Element-wise difference of two matrices of the same shape
    pub fn subtract(&self, other: &CooMatrix) -> Result<CooMatrix> {
        self.elementwise(other, Operation::Subtract, i64::wrapping_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`. Work is proportional to the stored
    /// entries of `self` times the fan-out of the matching rows of
    /// `other`.
    pub fn multiply(&self, other: &CooMatrix) -> Result<CooMatrix> {
        let (rows, cols) =
            Operation::Multiply.result_dimensions(self.dimensions(), other.dimensions())?;

        debug!(
            left = ?self.dimensions(),
            right = ?other.dimensions(),
            left_nnz = self.nnz(),
            right_nnz = other.nnz(),
            "multiplying sparse matrices"
        );

        // Right operand grouped by row: row -> [(col, value)]
        let mut right_rows: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();
        for entry in other.iter() {
            right_rows
                .entry(entry.row)
                .or_default()
                .push((entry.col, entry.value));
        }

        let mut sums: HashMap<(i64, i64), i64> = HashMap::new();
        for a in self.iter() {
            let Some(row_b) = right_rows.get(&a.col) else {
                continue;
            };
            for &(col_b, b_value) in row_b {
                let product = a.value.wrapping_mul(b_value);
                let cell = sums.entry((a.row, col_b)).or_insert(0);
                *cell = cell.wrapping_add(product);
            }
        }

        // Contributions may cancel; set() drops the zeros
        let mut result = CooMatrix::new(rows, cols);
        for ((row, col), value) in sums {
            result.set(row, col, value);
        }

        debug!(nnz = result.nnz(), "multiplication finished");
        Ok(result)
    }

    /// Apply the selected operation with `self` as the left operand
    pub fn apply(&self, operation: Operation, other: &CooMatrix) -> Result<CooMatrix> {
        match operation {
            Operation::Add => self.add(other),
            Operation::Subtract => self.subtract(other),
            Operation::Multiply => self.multiply(other),
        }
    }

    fn elementwise(
        &self,
        other: &CooMatrix,
        operation: Operation,
        combine: fn(i64, i64) -> i64,
    ) -> Result<CooMatrix> {
        let (rows, cols) = operation.result_dimensions(self.dimensions(), other.dimensions())?;

        debug!(
            %operation,
            shape = ?(rows, cols),
            left_nnz = self.nnz(),
            right_nnz = other.nnz(),
            "combining sparse matrices element-wise"
        );

        // Only coordinates stored in either operand can be non-zero
        let keys: HashSet<(i64, i64)> = self.keys().chain(other.keys()).collect();

        let mut result = CooMatrix::new(rows, cols);
        for (row, col) in keys {
            result.set(row, col, combine(self.get(row, col), other.get(row, col)));
        }

        Ok(result)
    }
}
