//! Core rate table, parsing and configuration

pub mod config;
pub mod error;
pub mod log;
pub mod parse;
pub mod table;

// Re-export main types for cleaner imports
pub use error::RateError;
pub use parse::{parse_number, parse_rate};
pub use table::{RateTable, normalize_code};
