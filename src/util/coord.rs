use crate::util::error::HexGeoError;
use geo::{Distance, Haversine};
use geo_types::Point;

/// Accessor trait so API functions accept both `(lon, lat)` tuples and
/// `geo_types::Point` values in decimal degrees.
pub trait Coordinate {
    fn lon(&self) -> f64;
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

pub(crate) fn validate_finite<C: Coordinate>(coord: &C) -> Result<(), HexGeoError> {
    if coord.lon().is_finite() && coord.lat().is_finite() {
        Ok(())
    } else {
        Err(HexGeoError::NonFiniteCoordinate)
    }
}

/// Great-circle (haversine) distance between two lon/lat points, in meters.
pub fn geodesic_distance_m<A: Coordinate, B: Coordinate>(a: &A, b: &B) -> f64 {
    Haversine.distance(Point::new(a.lon(), a.lat()), Point::new(b.lon(), b.lat()))
}
