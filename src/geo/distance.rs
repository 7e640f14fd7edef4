//! Geodesic distance on the WGS84 ellipsoid
//!
//! Uses Karney's algorithm (geographiclib) through the `geo` crate, so the
//! result agrees with standard geodesic tools to well under a millimeter.

use crate::geo::Coordinates;
use geo::{GeodesicDistance, Point};

/// Geodesic distance between two coordinates, in meters
pub fn geodesic_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    to_point(from).geodesic_distance(&to_point(to))
}

/// `geo` points are (x = longitude, y = latitude)
pub(crate) fn to_point(coords: Coordinates) -> Point<f64> {
    Point::new(coords.lng(), coords.lat())
}
