use placepicker_core::{entities::*, gateways::geolocation::GeolocationProbe};

/// A probe that answers without consulting a device.
#[derive(Debug, Clone, Copy)]
pub enum StaticGeolocation {
    Fixed(Coordinate),
    Failing(GeolocationError),
}

impl GeolocationProbe for StaticGeolocation {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        match *self {
            Self::Fixed(pos) => Ok(pos),
            Self::Failing(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn report_configured_result() {
        let probe = StaticGeolocation::Fixed(Coordinate::new(10.0, 20.0));
        assert_eq!(probe.current_position().await, Ok(Coordinate::new(10.0, 20.0)));
        let probe = StaticGeolocation::Failing(GeolocationError::Unsupported);
        assert_eq!(
            probe.current_position().await,
            Err(GeolocationError::Unsupported)
        );
    }
}
