//! Entry lines carrying one non-zero value each

use super::constants::{ENTRY_CLOSE, ENTRY_OPEN};
use crate::error::{MatrixError, Result};
use crate::validation::{parse_integer, split_fields};

/// A single `(row, col, value)` triple
///
/// Coordinates are signed and are not checked against the declared
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: i64, col: i64, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Coordinate key of this entry
    pub const fn key(&self) -> (i64, i64) {
        (self.row, self.col)
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{ENTRY_OPEN}{}, {}, {}{ENTRY_CLOSE}",
            self.row, self.col, self.value
        )
    }
}

/// Parse a trimmed, non-blank entry line
///
/// Checks run in a fixed order: the parentheses, then the field count,
/// then each field as an integer. `line_no` is the 1-based line number
/// used in errors.
pub fn parse_entry_line(line: &str, line_no: usize) -> Result<Entry> {
    let inner = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(MatrixError::WrongFormat { line: line_no })?;

    let [row, col, value] = split_fields(inner).map_err(|found| MatrixError::InvalidValueCount {
        line: line_no,
        found,
    })?;

    let field = |piece: &str| {
        parse_integer(piece).ok_or(MatrixError::WrongFormat { line: line_no })
    };

    Ok(Entry {
        row: field(row)?,
        col: field(col)?,
        value: field(value)?,
    })
}
