use jfs::Store;
use serde_json::Value;
use std::{
    io::{self, ErrorKind},
    path::Path,
};

use super::{KeyValueStore, StoreError};

/// Stores each key in a separate JSON file inside a directory.
pub struct JsonFileStore {
    json_store: Store,
}

impl JsonFileStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        match self.json_store.get::<Value>(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.json_store.save_with_id(value, key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    fn temp_dir() -> std::path::PathBuf {
        env::temp_dir().join(format!("placepicker-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_key() {
        let dir = temp_dir();
        let store = JsonFileStore::try_new(&dir).unwrap();
        assert!(store.get("cached-geolocation").unwrap().is_none());
        assert!(store.path().ends_with(dir.file_name().unwrap()));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = temp_dir();
        let value = serde_json::json!({ "lat": 1.5, "lng": -2.0 });
        JsonFileStore::try_new(&dir)
            .unwrap()
            .set("cached-geolocation", &value)
            .unwrap();
        let store = JsonFileStore::try_new(&dir).unwrap();
        assert_eq!(store.get("cached-geolocation").unwrap(), Some(value));
        fs::remove_dir_all(dir).unwrap();
    }
}
