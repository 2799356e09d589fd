//! SPMAT - Sparse Integer Matrix Arithmetic
//!
//! This library reads sparse integer matrices from a plain text
//! coordinate format, adds, subtracts or multiplies them using only
//! their non-zero entries, and writes the result back in the same
//! format.
//!
//! ## Architecture
//!
//! - **spmat-core**: format definitions, parsers, error taxonomy and traits (no I/O)
//! - **spmat**: the hash-map backed matrix, arithmetic, file I/O and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{CooMatrix, Operation};
//!
//! fn example() -> spmat::Result<()> {
//!     let a = CooMatrix::load("a.txt")?;
//!     let b = CooMatrix::load("b.txt")?;
//!
//!     let product = a.apply(Operation::Multiply, &b)?;
//!     product.save("a_times_b.txt")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Text format
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 1)
//! (1, 1, 2)
//! ```

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Core traits
    SparseMatrix,
    // Format definitions
    Dimensions, Entry, Operation,
    // Error taxonomy
    ErrorCategory, MatrixError,
};

// Implementation modules
pub mod arithmetic;
pub mod config;
pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod matrix;
pub mod output;
pub mod text;

// Public exports
pub use config::{OutputFormat, RunConfig, DEFAULT_OUTPUT_DIR};
pub use error::{Result, SpmatError};
#[cfg(feature = "serde")]
pub use json::MatrixDocument;
pub use matrix::CooMatrix;
pub use output::{result_file_name, write_result};
