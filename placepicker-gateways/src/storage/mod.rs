use serde_json::Value;
use std::io;
use thiserror::Error;

mod json_file;
mod memory;

pub use self::{json_file::*, memory::*};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Persistent key-value storage holding JSON values.
pub trait KeyValueStore {
    /// Returns `None` if no value has been stored for the key.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError>;
}
