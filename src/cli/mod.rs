pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;

use crate::core::{RateError, RateTable};
use crate::store::RateStore;
use tracing::debug;

/// Text shown when the rates file does not exist yet.
pub fn missing_table_notice(err: &RateError) -> String {
    format!("{err}. Starting with an empty rate table.")
}

/// Loads the rate table, starting empty when the store has no file yet.
///
/// The missing file is reported on stderr; any other load failure is
/// returned.
pub fn open_table(store: &dyn RateStore) -> Result<RateTable, RateError> {
    match store.load() {
        Ok(table) => Ok(table),
        Err(e @ RateError::FileNotFound(_)) => {
            debug!(location = %store.location(), "Rates file missing, starting empty");
            eprintln!(
                "{}",
                ui::style_text(&missing_table_notice(&e), ui::StyleType::Warning)
            );
            Ok(RateTable::new())
        }
        Err(e) => Err(e),
    }
}
