//! Attribute number parsing.
//!
//! Firmware memmap attributes are usually written as `0x`-prefixed hex, but the
//! reader accepts any base-prefixed form:
//! 1. **Hex:** `0x` / `0X`.
//! 2. **Octal:** `0o` / `0O`, or a bare leading `0` followed by more digits.
//! 3. **Binary:** `0b` / `0B`.
//! 4. **Decimal:** anything else.
//!
//! Signs, separators, and surrounding whitespace are rejected; callers trim first.

use thiserror::Error;

/// Reasons an attribute value is not a valid `u64`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseNumberError {
    /// No digits after the optional base prefix.
    #[error("no digits")]
    Empty,
    /// A character that is not a digit in the selected base.
    #[error("invalid digit {digit:?}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
    },
    /// The value does not fit in 64 bits.
    #[error("value out of range for u64")]
    Overflow,
}

/// Splits the base prefix off `text`.
///
/// A lone `"0"` stays decimal.
fn split_radix(text: &str) -> (u32, &str) {
    let Some(rest) = text.strip_prefix('0') else {
        return (10, text);
    };

    if let Some(hex) = rest.strip_prefix(['x', 'X']) {
        (16, hex)
    } else if let Some(oct) = rest.strip_prefix(['o', 'O']) {
        (8, oct)
    } else if let Some(bin) = rest.strip_prefix(['b', 'B']) {
        (2, bin)
    } else if rest.is_empty() {
        (10, text)
    } else {
        (8, rest)
    }
}

/// Parses an already-trimmed attribute value as an unsigned 64-bit integer.
///
/// # Errors
///
/// Returns [`ParseNumberError`] if `text` has no digits, contains a character
/// outside the selected base, or overflows `u64`.
///
/// # Examples
///
/// ```
/// use efimmap_core::common::parse_u64;
///
/// assert_eq!(parse_u64("0x9fc00"), Ok(0x9fc00));
/// assert_eq!(parse_u64("4096"), Ok(4096));
/// ```
pub fn parse_u64(text: &str) -> Result<u64, ParseNumberError> {
    let (radix, digits) = split_radix(text);
    if digits.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    digits.chars().try_fold(0u64, |acc, c| {
        let digit = c
            .to_digit(radix)
            .ok_or(ParseNumberError::InvalidDigit { digit: c })?;
        acc.checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(ParseNumberError::Overflow)
    })
}
