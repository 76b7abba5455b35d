use std::fmt;

use crate::{geo::*, id::*};

/// The single place that is currently highlighted on the map.
///
/// A new selection always replaces the previous one as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPlace {
    pub place_id: Option<PlaceId>,
    pub pos: Coordinate,
}

impl SelectedPlace {
    pub const fn at(pos: Coordinate) -> Self {
        Self {
            place_id: None,
            pos,
        }
    }
}

impl fmt::Display for SelectedPlace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = self.place_id.as_ref().map(PlaceId::as_str).unwrap_or_default();
        let Coordinate { lat, lng } = self.pos;
        write!(f, "place id: {id} coords: {{\"lat\":{lat},\"lng\":{lng}}}")
    }
}

/// A place as reported by an autocomplete or search box widget.
///
/// The location is missing if the user abandoned the selection
/// or the provider could not resolve a geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceResult {
    pub place_id: Option<PlaceId>,
    pub location: Option<Coordinate>,
}
