use geo_types::Point;

/// Trait for types that can provide WGS84 coordinates.
///
/// Implemented for `(f64, f64)` tuples in `(longitude, latitude)` order and
/// for `geo_types::Point<f64>`, so the API accepts either.
pub trait Coordinate {
    /// Returns the longitude.
    fn x(&self) -> f64;
    /// Returns the latitude.
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
