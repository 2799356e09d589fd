#![no_std]

//! SPMAT Core - Text Sparse Matrix Format Definitions
//!
//! This crate provides the I/O-free part of the sparse matrix toolkit:
//! the text format, its parsers, the operation selector, the error
//! taxonomy and the access traits.

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod operation;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use operation::Operation;
pub use traits::*;
pub use validation::parse_integer;
