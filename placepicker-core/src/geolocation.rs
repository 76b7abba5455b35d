use crate::entities::*;

/// Tracks the device location of the current session.
///
/// The probe result is accepted at most once. A failed probe keeps the
/// previous position but still resolves the state so that the user is
/// never asked twice for permission.
#[derive(Debug)]
pub struct GeolocationTracker {
    state: GeolocationState,
}

impl GeolocationTracker {
    pub const fn new(pos: Coordinate) -> Self {
        Self {
            state: GeolocationState::unresolved(pos),
        }
    }

    pub const fn state(&self) -> GeolocationState {
        self.state
    }

    pub const fn is_resolved(&self) -> bool {
        self.state.initialized
    }

    /// Returns the new position if it has changed.
    pub fn resolve(&mut self, result: Result<Coordinate, GeolocationError>) -> Option<Coordinate> {
        if self.is_resolved() {
            log::debug!("Geolocation already resolved: ignore {result:?}");
            return None;
        }
        self.state.initialized = true;
        match result {
            Ok(pos) if pos.is_finite() => {
                log::info!("Current position: {pos}");
                if pos == self.state.pos {
                    return None;
                }
                self.state.pos = pos;
                Some(pos)
            }
            Ok(pos) => {
                log::warn!("Discard invalid position {pos}");
                None
            }
            Err(err) => {
                log::warn!("Unable to determine the current position: {err}");
                None
            }
        }
    }
}
