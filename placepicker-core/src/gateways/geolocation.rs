use crate::entities::*;

/// One-shot request for the current device location.
#[allow(async_fn_in_trait)]
pub trait GeolocationProbe {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}
