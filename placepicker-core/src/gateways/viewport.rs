use crate::entities::*;

/// Handle of a mounted map widget.
pub trait ViewportController {
    fn set_center(&self, pos: Coordinate);
    /// Returns `None` if the widget has not been laid out yet.
    fn visible_bounds(&self) -> Option<ViewportBounds>;
}
