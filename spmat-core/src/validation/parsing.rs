//! Parsing utilities for header values and entry fields
//!
//! These work on borrowed string slices and never allocate.

use crate::format::constants::{FIELDS_PER_ENTRY, FIELD_SEPARATOR};

/// Parse a signed integer field
///
/// Accepts an optional sign followed by decimal digits. An integral
/// decimal form whose fraction is all zeros (`3.0`, `-4.00`) is also
/// accepted since it denotes an integer; any other fraction (`2.5`),
/// exponent or radix prefix is rejected, as is anything outside `i64`.
pub fn parse_integer(piece: &str) -> Option<i64> {
    let piece = piece.trim();
    if piece.is_empty() {
        return None;
    }

    let (negative, unsigned) = match piece.as_bytes()[0] {
        b'-' => (true, &piece[1..]),
        b'+' => (false, &piece[1..]),
        _ => (false, piece),
    };

    let digits = match unsigned.split_once('.') {
        Some((whole, fraction)) => {
            if whole.is_empty() || !fraction.bytes().all(|b| b == b'0') {
                return None;
            }
            whole
        }
        None => unsigned,
    };

    if digits.is_empty() {
        return None;
    }

    // Accumulate negatively so i64::MIN stays representable
    let mut result: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }

        let digit = (byte - b'0') as i64;
        result = result.checked_mul(10)?.checked_sub(digit)?;
    }

    if negative {
        Some(result)
    } else {
        result.checked_neg()
    }
}

/// Parse a non-negative count such as a row or column dimension
pub fn parse_count(piece: &str) -> Option<usize> {
    usize::try_from(parse_integer(piece)?).ok()
}

/// Split the inside of an entry line into its trimmed fields
///
/// Returns the three fields, or the number of fields found when that
/// number is not three.
pub fn split_fields(inner: &str) -> Result<[&str; FIELDS_PER_ENTRY], usize> {
    let mut fields = [""; FIELDS_PER_ENTRY];
    let mut count = 0;

    for piece in inner.split(FIELD_SEPARATOR) {
        if count < FIELDS_PER_ENTRY {
            fields[count] = piece.trim();
        }
        count += 1;
    }

    if count != FIELDS_PER_ENTRY {
        return Err(count);
    }

    Ok(fields)
}
