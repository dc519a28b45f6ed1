use super::ui;
use crate::core::{RateError, RateTable, normalize_code, parse_number};

/// Parses `amount` and converts it between two currencies of `table`.
///
/// Returns the line shown to the user.
pub fn convert(
    table: &RateTable,
    from: &str,
    to: &str,
    amount: &str,
    precision: Option<usize>,
) -> Result<String, RateError> {
    let amount = parse_number(amount)?;
    let converted = table.convert(from, to, amount)?;
    let to = normalize_code(to)?;

    Ok(format!(
        "Converted amount: {} {}",
        ui::style_text(&ui::format_amount(converted, precision), ui::StyleType::Value),
        ui::style_text(&to, ui::StyleType::Label)
    ))
}
