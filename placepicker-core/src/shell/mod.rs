use crate::{
    bounds::ViewportBoundsTracker,
    entities::*,
    gateways::{
        geolocation::GeolocationProbe,
        location_cache::LocationCache,
        places::{AutocompleteHandle, MapMouseEvent, SearchBoxHandle},
        viewport::ViewportController,
    },
    geolocation::GeolocationTracker,
    selection::{self, SelectionReconciler},
};


/// Initial settings of the map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: u8,
}

/// Wires the events of the map, the autocomplete input and the
/// search box to the session state.
pub struct MapShell<V, C> {
    cache: C,
    zoom: u8,
    map: Option<V>,
    geolocation: GeolocationTracker,
    bounds: ViewportBoundsTracker,
    selection: SelectionReconciler,
    autocomplete: Option<Box<dyn AutocompleteHandle>>,
    search_box: Option<Box<dyn SearchBoxHandle>>,
}

impl<V, C> MapShell<V, C>
where
    V: ViewportController,
    C: LocationCache,
{
    pub fn new(cache: C, zoom: u8) -> Self {
        let pos = cache.load();
        cache.save(pos);
        Self {
            cache,
            zoom,
            map: None,
            geolocation: GeolocationTracker::new(pos),
            bounds: ViewportBoundsTracker::default(),
            selection: SelectionReconciler::default(),
            autocomplete: None,
            search_box: None,
        }
    }

    pub const fn map_options(&self) -> MapOptions {
        MapOptions {
            center: self.geolocation.state().pos,
            zoom: self.zoom,
        }
    }

    pub const fn geolocation(&self) -> GeolocationState {
        self.geolocation.state()
    }

    pub const fn selected_place(&self) -> Option<&SelectedPlace> {
        self.selection.selected()
    }

    pub const fn bounds(&self) -> Option<ViewportBounds> {
        self.bounds.bounds()
    }

    pub const fn map(&self) -> Option<&V> {
        self.map.as_ref()
    }

    pub const fn cache(&self) -> &C {
        &self.cache
    }

    // -- map -- //

    pub fn on_map_load(&mut self, map: V) {
        log::debug!("Map loaded");
        self.map = Some(map);
        self.refresh_bounds();
    }

    pub fn on_map_unmount(&mut self) -> Option<V> {
        log::debug!("Map unmounted");
        self.map.take()
    }

    pub fn on_bounds_changed(&mut self) {
        self.refresh_bounds();
    }

    pub fn on_map_click(&mut self, event: &dyn MapMouseEvent) {
        self.select_by_pointer(event);
    }

    /// The marker only exists while a place is selected.
    pub fn on_marker_drag_end(&mut self, event: &dyn MapMouseEvent) {
        if self.selection.selected().is_none() {
            log::debug!("Ignore marker drag without a selected place");
            return;
        }
        self.select_by_pointer(event);
    }

    fn select_by_pointer(&mut self, event: &dyn MapMouseEvent) {
        let Some(place) = selection::pointer_selection(event) else {
            log::debug!("Ignore mouse event without position");
            return;
        };
        self.selection
            .report_selection(self.map.as_ref(), place, false);
    }

    fn refresh_bounds(&mut self) {
        let Some(bounds) = self.bounds.refresh(self.map.as_ref()) else {
            return;
        };
        log::debug!("Visible bounds changed: {bounds}");
        if let Some(autocomplete) = &self.autocomplete {
            autocomplete.set_bounds(bounds);
        }
        if let Some(search_box) = &self.search_box {
            search_box.set_bounds(bounds);
        }
    }

    // -- autocomplete -- //

    pub fn on_autocomplete_load<A>(&mut self, autocomplete: A)
    where
        A: AutocompleteHandle + 'static,
    {
        if let Some(bounds) = self.bounds.bounds() {
            autocomplete.set_bounds(bounds);
        }
        self.autocomplete = Some(Box::new(autocomplete));
    }

    pub fn on_place_changed(&mut self) {
        let Some(autocomplete) = &self.autocomplete else {
            log::debug!("Autocomplete not loaded yet");
            return;
        };
        let Some(place) = selection::autocomplete_selection(&autocomplete.place()) else {
            log::debug!("Committed suggestion has no location");
            return;
        };
        self.selection
            .report_selection(self.map.as_ref(), place, true);
    }

    // -- search box -- //

    pub fn on_search_box_load<S>(&mut self, search_box: S)
    where
        S: SearchBoxHandle + 'static,
    {
        if let Some(bounds) = self.bounds.bounds() {
            search_box.set_bounds(bounds);
        }
        self.search_box = Some(Box::new(search_box));
    }

    pub fn on_places_changed(&mut self) {
        let Some(search_box) = &self.search_box else {
            log::debug!("Search box not loaded yet");
            return;
        };
        let places = search_box.places();
        let Some(place) = selection::search_box_selection(places.as_deref()) else {
            log::debug!("No resolvable search result");
            return;
        };
        self.selection
            .report_selection(self.map.as_ref(), place, true);
    }

    // -- geolocation -- //

    pub const fn needs_geolocation(&self) -> bool {
        !self.geolocation.is_resolved()
    }

    /// Runs the probe unless the geolocation has already been resolved.
    pub async fn locate<P>(&mut self, probe: &P)
    where
        P: GeolocationProbe,
    {
        if !self.needs_geolocation() {
            return;
        }
        let result = probe.current_position().await;
        self.on_geolocation(result);
    }

    pub fn on_geolocation(&mut self, result: Result<Coordinate, GeolocationError>) {
        let Some(pos) = self.geolocation.resolve(result) else {
            return;
        };
        self.cache.save(pos);
        if let Some(map) = &self.map {
            map.set_center(pos);
        }
    }
}
