use serde_json::Value;
use std::{cell::RefCell, collections::HashMap};

use super::{KeyValueStore, StoreError};

/// Volatile storage that keeps the raw JSON text of each value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Puts raw text into the store without any validation.
    pub fn insert_raw(&self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), text.into());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self.entries.borrow();
        let Some(text) = entries.get(key) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(text)?))
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.entries.borrow_mut().insert(key.to_owned(), text);
        Ok(())
    }
}
