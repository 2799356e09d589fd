//! Field validation utilities for the text matrix format
//!
//! This module contains pure parsing functions with no I/O dependencies.

pub mod parsing;

pub use parsing::{parse_count, parse_integer, split_fields};
