use serde::Serialize;
use std::time::Duration;

use placepicker_boundary as json;
use placepicker_core::{
    entities::*,
    gateways::{geolocation::GeolocationProbe, location_cache::LocationCache},
    shell::MapShell,
};

mod script;
mod widgets;

pub use self::script::*;
use self::widgets::*;

/// Gives up on a probe that does not answer in time.
pub struct Bounded<P> {
    probe: P,
    timeout: Duration,
}

impl<P> Bounded<P> {
    pub const fn new(probe: P, timeout: Duration) -> Self {
        Self { probe, timeout }
    }
}

impl<P> GeolocationProbe for Bounded<P>
where
    P: GeolocationProbe,
{
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        tokio::time::timeout(self.timeout, self.probe.current_position())
            .await
            .unwrap_or(Err(GeolocationError::Timeout))
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub geolocation: json::GeolocationState,
    pub selected_place: Option<json::SelectedPlace>,
    /// Center of the mounted map.
    pub center: Option<json::Coordinate>,
    pub bounds: Option<json::ViewportBounds>,
}

impl<C> From<&MapShell<ScriptedMap, C>> for SessionState
where
    C: LocationCache,
{
    fn from(shell: &MapShell<ScriptedMap, C>) -> Self {
        Self {
            geolocation: shell.geolocation().into(),
            selected_place: shell.selected_place().cloned().map(Into::into),
            center: shell.map().map(|map| map.center().into()),
            bounds: shell.bounds().map(Into::into),
        }
    }
}

/// Mounts a map shell, resolves the geolocation once and
/// applies the recorded events in order.
pub async fn replay<C, P>(cache: C, zoom: u8, probe: &P, script: Script) -> SessionState
where
    C: LocationCache,
    P: GeolocationProbe,
{
    let mut shell = MapShell::<ScriptedMap, C>::new(cache, zoom);
    shell.locate(probe).await;

    let autocomplete = ScriptedAutocomplete::default();
    let search_box = ScriptedSearchBox::default();

    for (index, event) in script.events.into_iter().enumerate() {
        log::debug!("Apply event #{index}: {event:?}");
        match event {
            Event::MapLoad { bounds } => {
                let map = ScriptedMap::new(shell.map_options().center, bounds.map(Into::into));
                shell.on_map_load(map);
            }
            Event::MapUnmount => {
                shell.on_map_unmount();
            }
            Event::BoundsChanged { bounds } => {
                if let Some(map) = shell.map() {
                    map.lay_out(bounds.map(Into::into));
                }
                shell.on_bounds_changed();
            }
            Event::AutocompleteLoad => {
                shell.on_autocomplete_load(autocomplete.clone());
            }
            Event::PlaceChanged { place } => {
                autocomplete.commit(place.into());
                shell.on_place_changed();
            }
            Event::SearchBoxLoad => {
                shell.on_search_box_load(search_box.clone());
            }
            Event::PlacesChanged { places } => {
                search_box.commit(places.map(|places| places.into_iter().map(Into::into).collect()));
                shell.on_places_changed();
            }
            Event::MapClick { pos, place_id } => {
                let event = ScriptedMouseEvent::new(pos.map(Into::into), place_id);
                shell.on_map_click(&event);
                log::debug!("Info window suppressed: {}", event.is_stopped());
            }
            Event::MarkerDragEnd { pos } => {
                let event = ScriptedMouseEvent::new(pos.map(Into::into), None);
                shell.on_marker_drag_end(&event);
                log::debug!("Info window suppressed: {}", event.is_stopped());
            }
        }
    }
    if let Some(place) = shell.selected_place() {
        log::info!("{place}");
    }
    SessionState::from(&shell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use placepicker_gateways::{
        geolocation::StaticGeolocation,
        location_cache::{StoredLocation, DEFAULT_STORAGE_KEY},
        storage::MemoryStore,
    };

    const DEFAULT_POS: Coordinate = Coordinate::new(-3.745, -38.523);

    struct Pending;

    impl GeolocationProbe for Pending {
        async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
            std::future::pending().await
        }
    }

    fn cache() -> StoredLocation<MemoryStore> {
        StoredLocation::new(MemoryStore::default(), DEFAULT_STORAGE_KEY, DEFAULT_POS)
    }

    fn script(json: &str) -> Script {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn search_then_click() {
        let probe = StaticGeolocation::Fixed(Coordinate::new(10.0, 20.0));
        let state = replay(
            cache(),
            18,
            &probe,
            script(
                r#"{ "events": [
                  { "type": "map-load", "bounds": { "sw": { "lat": 9, "lng": 19 }, "ne": { "lat": 11, "lng": 21 } } },
                  { "type": "search-box-load" },
                  { "type": "places-changed", "places": [
                    { "placeId": "first", "location": { "lat": 50, "lng": 8 } },
                    { "placeId": "second", "location": { "lat": 51, "lng": 9 } }
                  ] },
                  { "type": "map-click", "pos": { "lat": 50.1, "lng": 8.1 } }
                ] }"#,
            ),
        )
        .await;
        assert_eq!(
            state.geolocation,
            json::GeolocationState {
                initialized: true,
                pos: json::Coordinate { lat: 10.0, lng: 20.0 }
            }
        );
        assert_eq!(
            state.selected_place,
            Some(json::SelectedPlace {
                place_id: None,
                pos: json::Coordinate { lat: 50.1, lng: 8.1 }
            })
        );
        assert_eq!(state.center, Some(json::Coordinate { lat: 50.0, lng: 8.0 }));
        assert!(state.bounds.is_some());
    }

    #[tokio::test]
    async fn empty_search_keeps_the_center() {
        let probe = StaticGeolocation::Failing(GeolocationError::PermissionDenied);
        let state = replay(
            cache(),
            18,
            &probe,
            script(
                r#"{ "events": [
                  { "type": "map-load" },
                  { "type": "search-box-load" },
                  { "type": "places-changed", "places": [] }
                ] }"#,
            ),
        )
        .await;
        assert!(state.selected_place.is_none());
        assert!(state.geolocation.initialized);
        assert_eq!(state.center, Some(json::Coordinate::from(DEFAULT_POS)));
    }

    #[tokio::test]
    async fn marker_drag_needs_a_selection() {
        let probe = StaticGeolocation::Failing(GeolocationError::Unsupported);
        let state = replay(
            cache(),
            18,
            &probe,
            script(
                r#"{ "events": [
                  { "type": "map-load" },
                  { "type": "marker-drag-end", "pos": { "lat": 5, "lng": 6 } }
                ] }"#,
            ),
        )
        .await;
        assert!(state.selected_place.is_none());
    }

    #[tokio::test]
    async fn probe_times_out() {
        let probe = Bounded::new(Pending, Duration::from_millis(10));
        assert_eq!(
            probe.current_position().await,
            Err(GeolocationError::Timeout)
        );
    }
}
