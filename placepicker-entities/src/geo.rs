use std::fmt;

/// A geographical position in degrees.
///
/// Ranges are not validated here, the map widget owns that concern.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// The rectangular area that is currently visible in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    sw: Coordinate,
    ne: Coordinate,
}

impl ViewportBounds {
    pub const fn new(sw: Coordinate, ne: Coordinate) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> Coordinate {
        self.sw
    }

    pub const fn north_east(&self) -> Coordinate {
        self.ne
    }
}

impl fmt::Display for ViewportBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_coordinates() {
        assert!(Coordinate::new(-3.745, -38.523).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display_as_lat_lng_pairs() {
        let bounds = ViewportBounds::new(Coordinate::new(1.5, 2.0), Coordinate::new(3.0, 4.25));
        assert_eq!(bounds.to_string(), "1.5,2,3,4.25");
    }
}
