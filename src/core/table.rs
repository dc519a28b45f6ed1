//! The in-memory exchange rate table and conversion arithmetic.

use crate::core::error::{RateError, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Maps currency codes to exchange rates relative to an implicit base unit.
///
/// Each rate is read as "units of base currency per 1 unit of that currency",
/// so converting rebases the amount into the base first and then into the
/// target. Codes are normalized to trimmed uppercase on every access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

/// Trims and uppercases a currency code, rejecting blank codes.
pub fn normalize_code(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(RateError::EmptyCurrencyCode);
    }
    Ok(code.to_uppercase())
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the rate for `code`.
    ///
    /// The rate is stored as given; callers parse and validate user input.
    /// Codes containing `:` or a line break cannot be saved as a `CODE:RATE`
    /// line and fail with [`RateError::InvalidCurrencyCode`].
    pub fn set_rate(&mut self, code: &str, rate: f64) -> Result<()> {
        let code = normalize_code(code)?;
        if code.contains([':', '\n', '\r']) {
            return Err(RateError::InvalidCurrencyCode(code));
        }
        debug!(%code, rate, "Setting exchange rate");
        self.rates.insert(code, rate);
        Ok(())
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        let code = normalize_code(code).ok()?;
        self.rates.get(&code).copied()
    }

    /// Converts `amount` of `from` into `to` as `(amount / rate[from]) * rate[to]`.
    ///
    /// `from` is looked up first, so it is the one reported when both codes
    /// are unknown. A zero or non-finite `from` rate, or a non-finite `to`
    /// rate, fails with [`RateError::InvalidRate`].
    pub fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64> {
        let (from, from_rate) = self.lookup(from)?;
        let (to, to_rate) = self.lookup(to)?;

        if from_rate == 0.0 || !from_rate.is_finite() {
            return Err(RateError::InvalidRate {
                code: from,
                rate: from_rate,
            });
        }
        if !to_rate.is_finite() {
            return Err(RateError::InvalidRate {
                code: to,
                rate: to_rate,
            });
        }

        let result = (amount / from_rate) * to_rate;
        debug!(%from, %to, amount, result, "Converted amount");
        Ok(result)
    }

    /// Snapshot of all entries, ordered by code.
    pub fn all_rates(&self) -> Vec<(String, f64)> {
        self.rates
            .iter()
            .map(|(code, rate)| (code.clone(), *rate))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    // Blank codes are never stored, so they report as unknown too.
    fn lookup(&self, code: &str) -> Result<(String, f64)> {
        let normalized = code.trim().to_uppercase();
        match self.rates.get(&normalized) {
            Some(rate) => Ok((normalized, *rate)),
            None => Err(RateError::UnknownCurrency(normalized)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RateTable {
        let mut table = RateTable::new();
        table.set_rate("USD", 1.0).unwrap();
        table.set_rate("EUR", 0.9).unwrap();
        table
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_convert_between_currencies() {
        let table = sample_table();
        assert_close(table.convert("USD", "EUR", 100.0).unwrap(), 90.0);
        assert_close(table.convert("EUR", "USD", 90.0).unwrap(), 100.0);
    }

    #[test]
    fn test_convert_matches_formula() {
        let mut table = RateTable::new();
        table.set_rate("AAA", 3.7).unwrap();
        table.set_rate("BBB", 0.125).unwrap();

        for amount in [0.0, 1.0, 42.5, 1_000_000.0] {
            let expected = (amount / 3.7) * 0.125;
            assert_eq!(table.convert("AAA", "BBB", amount).unwrap(), expected);
        }
    }

    #[test]
    fn test_identity_conversion() {
        let table = sample_table();
        assert_close(table.convert("EUR", "EUR", 123.45).unwrap(), 123.45);
        assert_close(table.convert("USD", "usd", 7.0).unwrap(), 7.0);
    }

    #[test]
    fn test_codes_are_case_insensitive() {
        let mut table = RateTable::new();
        table.set_rate("gbp", 0.8).unwrap();
        assert_eq!(table.rate("GBP"), Some(0.8));
        assert_eq!(table.all_rates(), vec![("GBP".to_string(), 0.8)]);

        table.set_rate("usd", 1.0).unwrap();
        assert_close(table.convert("Usd", "gBp", 10.0).unwrap(), 8.0);
    }

    #[test]
    fn test_unknown_target_currency() {
        let table = sample_table();
        let err = table.convert("USD", "GBP", 10.0).unwrap_err();
        assert!(matches!(&err, RateError::UnknownCurrency(code) if code == "GBP"));
        assert_eq!(err.to_string(), "Currency not found: GBP");
    }

    #[test]
    fn test_unknown_source_reported_first() {
        let table = sample_table();
        let err = table.convert("jpy", "GBP", 10.0).unwrap_err();
        assert!(matches!(&err, RateError::UnknownCurrency(code) if code == "JPY"));
    }

    #[test]
    fn test_set_rate_overwrites() {
        let mut table = sample_table();
        table.set_rate("eur", 0.5).unwrap();
        table.set_rate("EUR", 0.95).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rate("EUR"), Some(0.95));
        assert_close(table.convert("USD", "EUR", 100.0).unwrap(), 95.0);
    }

    #[test]
    fn test_set_rate_rejects_empty_code() {
        let mut table = RateTable::new();
        assert!(matches!(
            table.set_rate("   ", 1.0),
            Err(RateError::EmptyCurrencyCode)
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_convert_blank_code_is_unknown() {
        let table = sample_table();

        let err = table.convert("USD", "", 1.0).unwrap_err();
        assert!(matches!(&err, RateError::UnknownCurrency(code) if code.is_empty()));
        assert_eq!(err.to_string(), "Currency not found: ");

        let err = table.convert("  ", "", 1.0).unwrap_err();
        assert!(matches!(&err, RateError::UnknownCurrency(code) if code.is_empty()));
    }

    #[test]
    fn test_set_rate_rejects_codes_breaking_file_format() {
        let mut table = sample_table();

        for code in ["A:B", "x\nGBP", "EUR\r\nUSD"] {
            let err = table.set_rate(code, 5.0).unwrap_err();
            assert!(
                matches!(err, RateError::InvalidCurrencyCode(_)),
                "unexpected result for {code:?}: {err:?}"
            );
        }
        assert_eq!(table, sample_table());
    }

    #[test]
    fn test_zero_source_rate_is_invalid() {
        let mut table = sample_table();
        table.set_rate("XXX", 0.0).unwrap();

        let err = table.convert("XXX", "USD", 1.0).unwrap_err();
        assert!(matches!(
            err,
            RateError::InvalidRate { ref code, rate } if code == "XXX" && rate == 0.0
        ));

        // A zero target rate is well defined.
        assert_eq!(table.convert("USD", "XXX", 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_rates_are_invalid() {
        let mut table = sample_table();
        table.set_rate("NAN", f64::NAN).unwrap();
        table.set_rate("INF", f64::INFINITY).unwrap();

        assert!(matches!(
            table.convert("USD", "INF", 1.0),
            Err(RateError::InvalidRate { .. })
        ));
        assert!(matches!(
            table.convert("NAN", "USD", 1.0),
            Err(RateError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_all_rates_is_sorted_snapshot() {
        let mut table = RateTable::new();
        table.set_rate("JPY", 150.0).unwrap();
        table.set_rate("EUR", 0.9).unwrap();
        table.set_rate("USD", 1.0).unwrap();

        let codes: Vec<String> = table.all_rates().into_iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["EUR", "JPY", "USD"]);
    }
}
