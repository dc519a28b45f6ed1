pub mod file;
pub mod format;
pub mod memory;

use crate::core::RateTable;
use crate::core::error::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Persists a [`RateTable`] in the `CODE:RATE` text format.
pub trait RateStore {
    /// Loads the table. A store with nothing saved yet fails with
    /// [`crate::core::RateError::FileNotFound`].
    fn load(&self) -> Result<RateTable>;

    fn save(&self, table: &RateTable) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
