use crate::{
    entities::*,
    gateways::{places::MapMouseEvent, viewport::ViewportController},
};

/// Returns the location of a place if it is resolvable.
pub fn try_extract_coordinate(place: &PlaceResult) -> Option<Coordinate> {
    place.location.filter(|pos| pos.is_finite())
}

fn selected_place(place: &PlaceResult) -> Option<SelectedPlace> {
    let pos = try_extract_coordinate(place)?;
    let place_id = place.place_id.clone().filter(PlaceId::is_valid);
    Some(SelectedPlace { place_id, pos })
}

/// Selection of a committed autocomplete suggestion.
pub fn autocomplete_selection(place: &PlaceResult) -> Option<SelectedPlace> {
    selected_place(place)
}

/// Selection of the first search result, later results are ignored.
pub fn search_box_selection(places: Option<&[PlaceResult]>) -> Option<SelectedPlace> {
    places?.first().and_then(selected_place)
}

/// Selection of a picked coordinate.
///
/// Suppresses the default info window of the event if it carries a
/// coordinate.
pub fn pointer_selection(event: &dyn MapMouseEvent) -> Option<SelectedPlace> {
    let pos = event.lat_lng().filter(|pos| pos.is_finite())?;
    event.stop();
    let place_id = event
        .place_id()
        .map(PlaceId::from)
        .filter(PlaceId::is_valid);
    Some(SelectedPlace { place_id, pos })
}

/// Owns the currently selected place.
///
/// The last reported selection always wins, there is no ordering
/// between the different input sources.
#[derive(Debug, Default)]
pub struct SelectionReconciler {
    selected: Option<SelectedPlace>,
}

impl SelectionReconciler {
    pub const fn selected(&self) -> Option<&SelectedPlace> {
        self.selected.as_ref()
    }

    pub fn report_selection<V>(
        &mut self,
        viewport: Option<&V>,
        candidate: SelectedPlace,
        center_map: bool,
    ) where
        V: ViewportController + ?Sized,
    {
        log::debug!("Select {candidate} (center map: {center_map})");
        let pos = candidate.pos;
        self.selected = Some(candidate);
        if !center_map {
            return;
        }
        match viewport {
            Some(viewport) => viewport.set_center(pos),
            None => log::debug!("No map mounted: skip centering at {pos}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MockViewport {
        centers: RefCell<Vec<Coordinate>>,
    }

    impl ViewportController for MockViewport {
        fn set_center(&self, pos: Coordinate) {
            self.centers.borrow_mut().push(pos);
        }
        fn visible_bounds(&self) -> Option<ViewportBounds> {
            None
        }
    }

    #[derive(Default)]
    struct MockMouseEvent {
        lat_lng: Option<Coordinate>,
        place_id: Option<String>,
        stopped: Cell<bool>,
    }

    impl MapMouseEvent for MockMouseEvent {
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

    fn result(place_id: Option<&str>, location: Option<Coordinate>) -> PlaceResult {
        PlaceResult {
            place_id: place_id.map(Into::into),
            location,
        }
    }

    #[test]
    fn extract_resolvable_coordinates_only() {
        let pos = Coordinate::new(1.0, 2.0);
        assert_eq!(try_extract_coordinate(&result(None, Some(pos))), Some(pos));
        assert_eq!(try_extract_coordinate(&result(Some("x"), None)), None);
        let invalid = Coordinate::new(f64::NAN, 2.0);
        assert_eq!(try_extract_coordinate(&result(None, Some(invalid))), None);
    }

    #[test]
    fn autocomplete_without_geometry_yields_nothing() {
        assert!(autocomplete_selection(&result(Some("abc"), None)).is_none());
        let place = autocomplete_selection(&result(Some("abc"), Some(Coordinate::new(3.0, 4.0))));
        assert_eq!(
            place,
            Some(SelectedPlace {
                place_id: Some("abc".into()),
                pos: Coordinate::new(3.0, 4.0)
            })
        );
    }

    #[test]
    fn search_box_uses_only_the_first_result() {
        assert!(search_box_selection(None).is_none());
        assert!(search_box_selection(Some(&[][..])).is_none());

        let places = [
            result(Some("first"), None),
            result(Some("second"), Some(Coordinate::new(5.0, 6.0))),
        ];
        assert!(search_box_selection(Some(&places[..])).is_none());

        let places = [
            result(Some("first"), Some(Coordinate::new(1.0, 1.0))),
            result(Some("second"), Some(Coordinate::new(5.0, 6.0))),
        ];
        let place = search_box_selection(Some(&places[..])).unwrap();
        assert_eq!(place.place_id, Some("first".into()));
        assert_eq!(place.pos, Coordinate::new(1.0, 1.0));
    }

    #[test]
    fn empty_place_ids_are_dropped() {
        let place = autocomplete_selection(&result(Some(""), Some(Coordinate::new(1.0, 1.0))));
        assert_eq!(place.unwrap().place_id, None);
    }

    #[test]
    fn pointer_selection_suppresses_the_info_window() {
        let event = MockMouseEvent {
            lat_lng: Some(Coordinate::new(1.0, 2.0)),
            ..Default::default()
        };
        let place = pointer_selection(&event).unwrap();
        assert!(event.stopped.get());
        assert_eq!(place, SelectedPlace::at(Coordinate::new(1.0, 2.0)));
    }

    #[test]
    fn pointer_selection_on_a_labeled_feature() {
        let event = MockMouseEvent {
            lat_lng: Some(Coordinate::new(1.0, 2.0)),
            place_id: Some("poi".into()),
            ..Default::default()
        };
        let place = pointer_selection(&event).unwrap();
        assert_eq!(place.place_id, Some("poi".into()));
    }

    #[test]
    fn pointer_event_without_coordinate_is_ignored() {
        let event = MockMouseEvent::default();
        assert!(pointer_selection(&event).is_none());
        assert!(!event.stopped.get());
    }

    #[test]
    fn report_replaces_the_selection_without_merging() {
        let viewport = MockViewport::default();
        let mut reconciler = SelectionReconciler::default();
        reconciler.report_selection(
            Some(&viewport),
            SelectedPlace {
                place_id: Some("a".into()),
                pos: Coordinate::new(1.0, 1.0),
            },
            true,
        );
        reconciler.report_selection(
            Some(&viewport),
            SelectedPlace::at(Coordinate::new(2.0, 2.0)),
            false,
        );
        assert_eq!(
            reconciler.selected(),
            Some(&SelectedPlace::at(Coordinate::new(2.0, 2.0)))
        );
        assert_eq!(*viewport.centers.borrow(), vec![Coordinate::new(1.0, 1.0)]);
    }

    #[test]
    fn report_without_mounted_map_still_selects() {
        let mut reconciler = SelectionReconciler::default();
        reconciler.report_selection::<MockViewport>(
            None,
            SelectedPlace::at(Coordinate::new(2.0, 2.0)),
            true,
        );
        assert!(reconciler.selected().is_some());
    }
}
