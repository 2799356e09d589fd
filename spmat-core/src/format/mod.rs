//! Text sparse matrix format definitions
//!
//! A matrix is written as two header lines followed by one line per
//! non-zero entry:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (2, 1, -7)
//! ```

pub mod constants;
pub mod entry;
pub mod header;

pub use constants::*;
pub use entry::{parse_entry_line, Entry};
pub use header::{parse_dimension, parse_dimensions, Dimensions};
