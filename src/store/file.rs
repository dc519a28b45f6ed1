use super::RateStore;
use super::format::{format_rates, table_from_text};
use crate::core::RateTable;
use crate::core::error::{RateError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the rate table in a plain text file.
///
/// Writes go straight to the target path; a failed write can leave a
/// partially written file behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateStore for FileStore {
    fn load(&self) -> Result<RateTable> {
        debug!(path = %self.path.display(), "Loading rates");
        let text = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RateError::FileNotFound(self.path.clone())
            } else {
                RateError::FileRead {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let table = table_from_text(&text);
        debug!(entries = table.len(), "Loaded rates");
        Ok(table)
    }

    fn save(&self, table: &RateTable) -> Result<()> {
        let write_error = |source| RateError::FileWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }
        fs::write(&self.path, format_rates(table)).map_err(write_error)?;
        debug!(path = %self.path.display(), entries = table.len(), "Saved rates");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
