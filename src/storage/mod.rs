//! Persistence contract and the expense storage adapter.

pub mod json_file;
pub mod memory;

use crate::{errors::PersistenceError, ledger::Expense};

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Reserved slot holding the serialized entries sequence. Stable contract:
/// renaming it orphans previously stored data.
pub const STORAGE_KEY: &str = "expenses";

/// Narrow get/set-string contract over the storage medium, so the medium can
/// be swapped without touching ledger logic.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Serializes the entries sequence into the reserved slot and back. Holds no
/// cached copy; every call reads or writes through to the medium.
pub struct ExpenseStore {
    medium: Box<dyn KeyValueStore>,
}

impl ExpenseStore {
    pub fn new(medium: Box<dyn KeyValueStore>) -> Self {
        Self { medium }
    }

    /// Adapter over a volatile in-memory medium.
    pub fn in_memory() -> Self {
        Self::new(Box::new(memory::MemoryStore::default()))
    }

    /// Writes the full unfiltered sequence to the slot.
    pub fn save(&mut self, entries: &[Expense]) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        self.medium.set(STORAGE_KEY, &payload)
    }

    /// Reads the slot. A never-written slot is an empty sequence; a present
    /// but undecodable payload is a `Corrupt` error for the caller to
    /// downgrade.
    pub fn load(&self) -> Result<Vec<Expense>> {
        match self.medium.get(STORAGE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
