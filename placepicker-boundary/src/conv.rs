use super::*;
use placepicker_entities as e;

impl From<e::geo::Coordinate> for Coordinate {
    fn from(from: e::geo::Coordinate) -> Self {
        let e::geo::Coordinate { lat, lng } = from;
        Self { lat, lng }
    }
}

impl From<Coordinate> for e::geo::Coordinate {
    fn from(from: Coordinate) -> Self {
        let Coordinate { lat, lng } = from;
        Self::new(lat, lng)
    }
}

impl From<e::geo::ViewportBounds> for ViewportBounds {
    fn from(from: e::geo::ViewportBounds) -> Self {
        Self {
            sw: from.south_west().into(),
            ne: from.north_east().into(),
        }
    }
}

impl From<ViewportBounds> for e::geo::ViewportBounds {
    fn from(from: ViewportBounds) -> Self {
        let ViewportBounds { sw, ne } = from;
        Self::new(sw.into(), ne.into())
    }
}

impl From<e::place::SelectedPlace> for SelectedPlace {
    fn from(from: e::place::SelectedPlace) -> Self {
        let e::place::SelectedPlace { place_id, pos } = from;
        Self {
            place_id: place_id.map(Into::into),
            pos: pos.into(),
        }
    }
}

impl From<PlaceResult> for e::place::PlaceResult {
    fn from(from: PlaceResult) -> Self {
        let PlaceResult { place_id, location } = from;
        Self {
            place_id: place_id.map(Into::into),
            location: location.map(Into::into),
        }
    }
}

impl From<e::geolocation::GeolocationState> for GeolocationState {
    fn from(from: e::geolocation::GeolocationState) -> Self {
        let e::geolocation::GeolocationState { initialized, pos } = from;
        Self {
            initialized,
            pos: pos.into(),
        }
    }
}
