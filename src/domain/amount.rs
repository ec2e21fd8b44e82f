//! Parsing of raw income fields into validated amounts.
//!
//! A missing or empty field counts as zero income. Anything else must be a
//! finite, non-negative decimal number.

/// Errors that can occur while parsing an income amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Amount is not a valid decimal number")]
    InvalidFormat,

    #[error("Amount must not be negative")]
    NegativeAmount,
}

/// Parses a raw form value into a non-negative amount.
///
/// # Rules
///
/// 1. **Empty**: `""` is accepted as `0.0`
/// 2. **Format**: the text must parse as a finite `f64`; surrounding
///    whitespace is not trimmed
/// 3. **Sign**: negative values are rejected (`-0` is accepted as zero)
///
/// # Errors
///
/// Returns [`ParseError::InvalidFormat`] for text that is not a decimal number,
/// including `inf` and `NaN`.
/// Returns [`ParseError::NegativeAmount`] for values below zero.
///
/// # Examples
///
/// ```
/// use tax_form::domain::amount::{ParseError, parse_amount};
///
/// assert_eq!(parse_amount(""), Ok(0.0));
/// assert_eq!(parse_amount("1500.50"), Ok(1500.5));
/// assert_eq!(parse_amount("abc"), Err(ParseError::InvalidFormat));
/// assert_eq!(parse_amount("-5"), Err(ParseError::NegativeAmount));
/// ```
pub fn parse_amount(raw: &str) -> Result<f64, ParseError> {
    if raw.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = raw.parse().map_err(|_| ParseError::InvalidFormat)?;

    if !value.is_finite() {
        return Err(ParseError::InvalidFormat);
    }

    if value < 0.0 {
        return Err(ParseError::NegativeAmount);
    }

    // `-0` compares equal to zero but would echo back with a sign
    Ok(if value == 0.0 { 0.0 } else { value })
}
