use thiserror::Error;

use crate::geo::Coordinate;

/// Device location as tracked during one session.
///
/// `initialized` flips to `true` exactly once, after the first probe
/// result (success or failure) has been received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeolocationState {
    pub initialized: bool,
    pub pos: Coordinate,
}

impl GeolocationState {
    pub const fn unresolved(pos: Coordinate) -> Self {
        Self {
            initialized: false,
            pos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("Permission to access the location was denied")]
    PermissionDenied,
    #[error("The position is unavailable")]
    PositionUnavailable,
    #[error("Timeout while acquiring the position")]
    Timeout,
}
