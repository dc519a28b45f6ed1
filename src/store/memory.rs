use super::RateStore;
use super::format::{format_rates, table_from_text};
use crate::core::RateTable;
use crate::core::error::{RateError, Result};
use std::path::PathBuf;
use std::sync::RwLock;

/// Keeps the serialized rate file in memory instead of on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty store; loading it behaves like a missing file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: &str) -> Self {
        Self {
            contents: RwLock::new(Some(text.to_string())),
        }
    }

    /// The text the last save produced, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl RateStore for MemoryStore {
    fn load(&self) -> Result<RateTable> {
        match self.contents() {
            Some(text) => Ok(table_from_text(&text)),
            None => Err(RateError::FileNotFound(PathBuf::from(self.location()))),
        }
    }

    fn save(&self, table: &RateTable) -> Result<()> {
        let mut contents = self
            .contents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *contents = Some(format_rates(table));
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.load(), Err(RateError::FileNotFound(_))));
        assert!(store.contents().is_none());
    }

    #[test]
    fn test_save_replaces_contents() {
        let store = MemoryStore::with_contents("USD:1\n");

        let mut table = store.load().unwrap();
        table.set_rate("chf", 0.88).unwrap();
        store.save(&table).unwrap();

        assert_eq!(store.contents().as_deref(), Some("CHF:0.88\nUSD:1\n"));
        assert_eq!(store.load().unwrap(), table);
    }
}
