//! Loading and saving matrices in the text coordinate format

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use spmat_core::{parse_dimensions, parse_entry_line, MatrixError, SparseMatrix, FIRST_ENTRY_LINE};
use tracing::{info, trace};

use crate::error::{Result, SpmatError};
use crate::matrix::CooMatrix;

impl CooMatrix {
    /// Parse a matrix from its text form
    ///
    /// Each line is trimmed before it is interpreted, and blank entry
    /// lines are skipped. The first malformed line aborts the whole
    /// parse.
    pub fn parse(text: &str) -> std::result::Result<CooMatrix, MatrixError> {
        let mut lines = text.split('\n').map(str::trim);
        let dimensions = parse_dimensions(lines.next(), lines.next())?;

        let mut matrix = CooMatrix::new(dimensions.rows, dimensions.cols);
        for (offset, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let entry = parse_entry_line(line, FIRST_ENTRY_LINE + offset)?;
            matrix.set(entry.row, entry.col, entry.value);
        }

        Ok(matrix)
    }

    /// Read and parse a matrix file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SpmatError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let matrix = CooMatrix::parse(&text)?;
        trace!(
            path = %path.display(),
            rows = matrix.rows(),
            cols = matrix.cols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Render the matrix in its text form
    ///
    /// Entry lines are sorted by row, then column. There is no trailing
    /// newline.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Write the text form of the matrix to a file in one write
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.serialize()).map_err(|source| SpmatError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), nnz = self.nnz(), "saved matrix");
        Ok(())
    }
}

impl fmt::Display for CooMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shape())?;
        for entry in self.entries() {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

impl FromStr for CooMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CooMatrix::parse(s)
    }
}
