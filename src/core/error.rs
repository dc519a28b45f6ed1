//! Error types for rate table, parsing and persistence operations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Currency not found: {0}")]
    UnknownCurrency(String),

    #[error("Currency code must not be empty")]
    EmptyCurrencyCode,

    #[error("Currency code must not contain ':' or line breaks: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("Invalid number: '{0}'")]
    NumberParse(String),

    #[error("Exchange rate must not be negative: {0}")]
    NegativeRate(f64),

    #[error("Cannot convert using {code}: exchange rate is {rate}")]
    InvalidRate { code: String, rate: f64 },

    #[error("Rates file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read rates file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write rates file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RateError>;
