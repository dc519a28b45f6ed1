//! Parsing of user-entered numbers.

use crate::core::error::{RateError, Result};

/// Parses a decimal amount, ignoring surrounding whitespace.
///
/// `inf` and `NaN` are rejected even though `f64::from_str` accepts them.
pub fn parse_number(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RateError::NumberParse(text.to_string())),
    }
}

/// Parses an exchange rate: a finite, non-negative number.
pub fn parse_rate(text: &str) -> Result<f64> {
    let rate = parse_number(text)?;
    if rate < 0.0 {
        return Err(RateError::NegativeRate(rate));
    }
    Ok(rate)
}
