use crate::{entities::*, gateways::viewport::ViewportController};

/// Read-only copy of the visible area of the map.
///
/// Once bounds are known they are never cleared again.
#[derive(Debug, Default)]
pub struct ViewportBoundsTracker {
    bounds: Option<ViewportBounds>,
}

impl ViewportBoundsTracker {
    pub const fn bounds(&self) -> Option<ViewportBounds> {
        self.bounds
    }

    /// Returns the bounds if they have been updated.
    pub fn refresh<V>(&mut self, viewport: Option<&V>) -> Option<ViewportBounds>
    where
        V: ViewportController + ?Sized,
    {
        let Some(bounds) = viewport.and_then(|viewport| viewport.visible_bounds()) else {
            log::debug!("No viewport bounds available: keep {:?}", self.bounds);
            return None;
        };
        if self.bounds == Some(bounds) {
            return None;
        }
        self.bounds = Some(bounds);
        Some(bounds)
    }
}
