//! Abstract interfaces for sparse matrix access
//!
//! Traits are pure interfaces; concrete storage lives in the
//! implementation crate.

pub mod matrix;

pub use matrix::SparseMatrix;
