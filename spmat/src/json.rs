//! JSON representation of matrices (requires the `serde` feature)

use serde::{Deserialize, Serialize};
use spmat_core::{Dimensions, Entry};

use crate::error::Result;
use crate::matrix::CooMatrix;

/// Serialized shape of a [`CooMatrix`]
///
/// Entries are listed in row-major order. Zero-valued entries read from
/// a document are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixDocument {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl From<CooMatrix> for MatrixDocument {
    fn from(matrix: CooMatrix) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            entries: matrix.entries(),
        }
    }
}

impl From<MatrixDocument> for CooMatrix {
    fn from(document: MatrixDocument) -> Self {
        CooMatrix::from_entries(Dimensions::new(document.rows, document.cols), document.entries)
    }
}

impl CooMatrix {
    /// Pretty-printed JSON form of the matrix
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a matrix from its JSON form
    pub fn from_json(json: &str) -> Result<CooMatrix> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::SparseMatrix;

    #[test]
    fn test_json_round_trip() {
        let mut matrix = CooMatrix::new(3, 3);
        matrix.set(2, 0, 4);
        matrix.set(0, 1, -6);

        let json = matrix.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"], 3);
        assert_eq!(value["entries"][0]["row"], 0);
        assert_eq!(value["entries"][0]["value"], -6);

        assert_eq!(CooMatrix::from_json(&json).unwrap(), matrix);
    }

    #[test]
    fn test_json_drops_zero_entries() {
        let json = r#"{"rows": 2, "cols": 2, "entries": [
            {"row": 0, "col": 0, "value": 0},
            {"row": 1, "col": 1, "value": 3}
        ]}"#;

        let matrix = CooMatrix::from_json(json).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(1, 1), 3);
    }

    #[test]
    fn test_json_without_entries() {
        let matrix = CooMatrix::from_json(r#"{"rows": 4, "cols": 1}"#).unwrap();
        assert_eq!(matrix.dimensions(), (4, 1));
        assert!(matrix.is_empty());
    }
}
