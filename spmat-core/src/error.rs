//! Error types for sparse matrix parsing and arithmetic

use crate::operation::Operation;

/// Broad classification of a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The text source does not follow the matrix format
    Format,
    /// Operand shapes are incompatible with the requested operation
    Dimension,
}

/// Errors that can occur while reading or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The `rows=` or `cols=` header line is missing or not a non-negative integer
    InvalidDimensions {
        /// 1-based line number of the offending header line
        line: usize,
    },
    /// An entry line is not wrapped in parentheses or holds a non-integer field
    WrongFormat {
        /// 1-based line number of the offending entry line
        line: usize,
    },
    /// An entry line does not hold exactly three comma separated fields
    InvalidValueCount {
        /// 1-based line number of the offending entry line
        line: usize,
        /// Number of fields actually found
        found: usize,
    },
    /// Operand shapes do not satisfy the operation's precondition
    DimensionMismatch {
        /// Operation that was attempted
        operation: Operation,
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },
    /// An operation selector did not name add, subtract or multiply
    UnknownOperation,
}

impl MatrixError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            _ => ErrorCategory::Format,
        }
    }

    pub const fn is_format_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Format)
    }

    pub const fn is_dimension_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Dimension)
    }

    /// Line number the error points at, if it came from parsing
    pub const fn line(&self) -> Option<usize> {
        match self {
            MatrixError::InvalidDimensions { line }
            | MatrixError::WrongFormat { line }
            | MatrixError::InvalidValueCount { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimensions { line } => {
                write!(f, "Invalid matrix dimensions format at line {line}")
            }
            MatrixError::WrongFormat { line } => {
                write!(f, "Input file has wrong format at line {line}")
            }
            MatrixError::InvalidValueCount { line, found } => write!(
                f,
                "Invalid number of values at line {line}. Expected 3 values: row,col,value (found {found})"
            ),
            MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left,
                right,
            } => write!(
                f,
                "First matrix columns must match second matrix rows ({}x{} * {}x{})",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Matrix dimensions must match for {} ({}x{} vs {}x{})",
                operation.name(),
                left.0,
                left.1,
                right.0,
                right.1
            ),
            MatrixError::UnknownOperation => {
                write!(f, "Unknown operation, expected add, subtract or multiply")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
