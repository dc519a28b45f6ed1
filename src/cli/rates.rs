use super::ui;
use crate::core::{RateError, RateTable, normalize_code, parse_rate};
use crate::store::RateStore;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RateEntry {
    code: String,
    rate: f64,
}

/// Adds or updates a rate and persists the table.
///
/// If saving fails the table keeps the new rate, so memory and disk can
/// disagree until the next successful save.
pub fn set_rate(
    table: &mut RateTable,
    store: &dyn RateStore,
    code: &str,
    rate: &str,
) -> Result<String, RateError> {
    let rate = parse_rate(rate)?;
    let code = normalize_code(code)?;
    table.set_rate(&code, rate)?;
    store.save(table)?;

    Ok(format!(
        "Exchange rate updated: {} = {}",
        ui::style_text(&code, ui::StyleType::Label),
        ui::style_text(&rate.to_string(), ui::StyleType::Value)
    ))
}

/// Renders every rate, either as a styled table or as JSON.
pub fn list_rates(table: &RateTable, json: bool) -> Result<String> {
    if json {
        let entries: Vec<RateEntry> = table
            .all_rates()
            .into_iter()
            .map(|(code, rate)| RateEntry { code, rate })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    if table.is_empty() {
        return Ok(ui::style_text(
            "No exchange rates defined. Add one with `fxconv set <CODE> <RATE>`.",
            ui::StyleType::Subtle,
        ));
    }

    let mut rates_table = ui::new_styled_table();
    rates_table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Rate")]);
    for (code, rate) in table.all_rates() {
        rates_table.add_row(vec![
            comfy_table::Cell::new(code),
            ui::number_cell(rate.to_string()),
        ]);
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Exchange Rates", ui::StyleType::Title)
    );
    output.push_str(&rates_table.to_string());
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(
            &format!("{} currencies", table.len()),
            ui::StyleType::Subtle
        )
    ));
    Ok(output)
}
