//! Error types for the sparse matrix implementation crate

use std::path::PathBuf;

use spmat_core::MatrixError;
use thiserror::Error;

/// Result type alias for spmat operations
pub type Result<T> = std::result::Result<T, SpmatError>;

/// Errors raised while loading, combining or saving matrices
#[derive(Error, Debug)]
pub enum SpmatError {
    /// Malformed text or incompatible operand shapes
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// A matrix file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result file or its directory could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpmatError {
    /// The underlying format or dimension error, if this is one
    pub fn matrix_error(&self) -> Option<&MatrixError> {
        match self {
            SpmatError::Matrix(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_format_error(&self) -> bool {
        self.matrix_error().is_some_and(MatrixError::is_format_error)
    }

    pub fn is_dimension_error(&self) -> bool {
        self.matrix_error().is_some_and(MatrixError::is_dimension_error)
    }
}
