use crate::entities::*;

pub trait AutocompleteHandle {
    /// The currently committed suggestion.
    fn place(&self) -> PlaceResult;
    /// Bias suggestions towards the visible area.
    fn set_bounds(&self, bounds: ViewportBounds);
}

pub trait SearchBoxHandle {
    /// Ordered search results, `None` if no search has been submitted.
    fn places(&self) -> Option<Vec<PlaceResult>>;
    /// Bias results towards the visible area.
    fn set_bounds(&self, bounds: ViewportBounds);
}

/// Click on the map or the end of a marker drag.
pub trait MapMouseEvent {
    fn lat_lng(&self) -> Option<Coordinate>;
    /// Only available when a labeled map feature has been clicked.
    fn place_id(&self) -> Option<String>;
    /// Suppress the default info window.
    fn stop(&self);
}
