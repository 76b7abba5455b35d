use placepicker_boundary as json;
use placepicker_core::{entities::Coordinate, gateways::location_cache::LocationCache};

use crate::storage::KeyValueStore;

pub const DEFAULT_STORAGE_KEY: &str = "cached-geolocation";

/// Keeps the last known location in a single slot of a key-value store.
pub struct StoredLocation<S> {
    store: S,
    key: String,
    fallback: Coordinate,
}

impl<S> StoredLocation<S> {
    pub fn new(store: S, key: impl Into<String>, fallback: Coordinate) -> Self {
        Self {
            store,
            key: key.into(),
            fallback,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S> LocationCache for StoredLocation<S>
where
    S: KeyValueStore,
{
    fn load(&self) -> Coordinate {
        let value = match self.store.get(&self.key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("No cached location found: use {}", self.fallback);
                return self.fallback;
            }
            Err(err) => {
                log::warn!("Unable to read cached location: {err}");
                return self.fallback;
            }
        };
        match serde_json::from_value::<json::Coordinate>(value) {
            Ok(pos) => {
                let pos = Coordinate::from(pos);
                if pos.is_finite() {
                    pos
                } else {
                    log::warn!("Ignore invalid cached location {pos}");
                    self.fallback
                }
            }
            Err(err) => {
                log::warn!("Ignore malformed cached location: {err}");
                self.fallback
            }
        }
    }

    fn save(&self, pos: Coordinate) {
        let value = match serde_json::to_value(json::Coordinate::from(pos)) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Unable to serialize location {pos}: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &value) {
            log::warn!("Unable to cache location {pos}: {err}");
        }
    }
}
