use crate::entities::*;

/// A single persistent slot for the last known device location.
pub trait LocationCache {
    /// Returns the persisted coordinate or a fallback if the slot is
    /// empty or unreadable.
    fn load(&self) -> Coordinate;
    fn save(&self, pos: Coordinate);
}
