//! The line-oriented `CODE:RATE` text format.
//!
//! Reading is deliberately lenient: any line that is not exactly one
//! `CODE:RATE` pair with a valid rate is skipped rather than failing the load.

use crate::core::{RateTable, parse_rate};
use tracing::debug;

/// Parses `CODE:RATE` lines, returning codes as written in the text.
pub fn parse_rates(text: &str) -> Vec<(String, f64)> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let entry = parse_line(line);
            if entry.is_none() {
                debug!(line_number = index + 1, %line, "Skipping malformed rate line");
            }
            entry
        })
        .collect()
}

fn parse_line(line: &str) -> Option<(String, f64)> {
    let mut parts = line.split(':');
    let (code, rate) = match (parts.next(), parts.next(), parts.next()) {
        (Some(code), Some(rate), None) => (code, rate),
        _ => return None,
    };
    if code.trim().is_empty() {
        return None;
    }
    let rate = parse_rate(rate).ok()?;
    Some((code.to_string(), rate))
}

/// Writes one `CODE:RATE` line per entry, in table order.
pub fn format_rates(table: &RateTable) -> String {
    table
        .all_rates()
        .into_iter()
        .map(|(code, rate)| format!("{code}:{rate}\n"))
        .collect()
}

/// Builds a table from parsed entries; codes are normalized on insert.
pub fn table_from_text(text: &str) -> RateTable {
    let mut table = RateTable::new();
    for (code, rate) in parse_rates(text) {
        // parse_line already rejects blank codes
        if let Err(e) = table.set_rate(&code, rate) {
            debug!(%code, error = %e, "Skipping rate entry");
        }
    }
    table
}
