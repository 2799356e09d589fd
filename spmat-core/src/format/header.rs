//! Header lines carrying the matrix dimensions

use super::constants::{COLS_KEY, KEY_SEPARATOR, ROWS_KEY};
use crate::error::{MatrixError, Result};
use crate::validation::parse_count;

/// Declared shape of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Renders the two header lines, without a trailing newline
impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{ROWS_KEY}{KEY_SEPARATOR}{}\n{COLS_KEY}{KEY_SEPARATOR}{}",
            self.rows, self.cols
        )
    }
}

/// Parse one header line of the form `key=<count>`
///
/// Only the text after the first `=` is interpreted; the key itself is
/// not checked. `line_no` is the 1-based line number used in errors.
pub fn parse_dimension(line: &str, line_no: usize) -> Result<usize> {
    let (_, value) = line
        .split_once(KEY_SEPARATOR)
        .ok_or(MatrixError::InvalidDimensions { line: line_no })?;

    parse_count(value).ok_or(MatrixError::InvalidDimensions { line: line_no })
}

/// Parse the first two lines of a matrix text
///
/// A missing line is reported as invalid dimensions.
pub fn parse_dimensions(rows_line: Option<&str>, cols_line: Option<&str>) -> Result<Dimensions> {
    let rows = parse_dimension(rows_line.unwrap_or(""), 1)?;
    let cols = parse_dimension(cols_line.unwrap_or(""), 2)?;
    Ok(Dimensions { rows, cols })
}
