use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use placepicker_core::{
    entities::*,
    gateways::{
        places::{AutocompleteHandle, MapMouseEvent, SearchBoxHandle},
        viewport::ViewportController,
    },
};

/// Map widget whose layout is driven by the script.
#[derive(Debug)]
pub struct ScriptedMap {
    center: Cell<Coordinate>,
    bounds: Cell<Option<ViewportBounds>>,
}

impl ScriptedMap {
    pub const fn new(center: Coordinate, bounds: Option<ViewportBounds>) -> Self {
        Self {
            center: Cell::new(center),
            bounds: Cell::new(bounds),
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center.get()
    }

    pub fn lay_out(&self, bounds: Option<ViewportBounds>) {
        self.bounds.set(bounds);
    }
}

impl ViewportController for ScriptedMap {
    fn set_center(&self, pos: Coordinate) {
        log::info!("Center map at {pos}");
        self.center.set(pos);
    }

    fn visible_bounds(&self) -> Option<ViewportBounds> {
        self.bounds.get()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedAutocomplete(Rc<RefCell<PlaceResult>>);

impl ScriptedAutocomplete {
    pub fn commit(&self, place: PlaceResult) {
        *self.0.borrow_mut() = place;
    }
}

impl AutocompleteHandle for ScriptedAutocomplete {
    fn place(&self) -> PlaceResult {
        self.0.borrow().clone()
    }

    fn set_bounds(&self, bounds: ViewportBounds) {
        log::debug!("Bias autocomplete towards {bounds}");
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedSearchBox(Rc<RefCell<Option<Vec<PlaceResult>>>>);

impl ScriptedSearchBox {
    pub fn commit(&self, places: Option<Vec<PlaceResult>>) {
        *self.0.borrow_mut() = places;
    }
}

impl SearchBoxHandle for ScriptedSearchBox {
    fn places(&self) -> Option<Vec<PlaceResult>> {
        self.0.borrow().clone()
    }

    fn set_bounds(&self, bounds: ViewportBounds) {
        log::debug!("Bias search box towards {bounds}");
    }
}

#[derive(Debug)]
pub struct ScriptedMouseEvent {
    lat_lng: Option<Coordinate>,
    place_id: Option<String>,
    stopped: Cell<bool>,
}

impl ScriptedMouseEvent {
    pub const fn new(lat_lng: Option<Coordinate>, place_id: Option<String>) -> Self {
        Self {
            lat_lng,
            place_id,
            stopped: Cell::new(false),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl MapMouseEvent for ScriptedMouseEvent {
    fn lat_lng(&self) -> Option<Coordinate> {
        self.lat_lng
    }

    fn place_id(&self) -> Option<String> {
        self.place_id.clone()
    }

    fn stop(&self) {
        self.stopped.set(true);
    }
}
