//! Geographic utilities.
//!
//! Great-circle distances use `geo`'s haversine implementation, which assumes
//! a spherical Earth with mean radius 6,371,008.8 m. That is within 2 ppm of
//! the 6,371,000 m sphere, well below consumer GPS error.

use geo::{Distance, Haversine, Point};

use crate::GpsPoint;

/// Mean Earth radius used by the haversine distance, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Calculate haversine distance between two GPS points in meters
pub fn haversine_distance(p1: &GpsPoint, p2: &GpsPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Total length of a polyline in meters.
pub fn polyline_length(points: &[GpsPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

/// Point reached by travelling `meters` due east along the parallel of
/// `origin`. Exact along the equator; used to lay out synthetic runs.
pub fn offset_east(origin: &GpsPoint, meters: f64) -> GpsPoint {
    let lat_rad = origin.latitude.to_radians();
    let radius = EARTH_RADIUS_METERS * lat_rad.cos().max(1e-9);
    GpsPoint::new(origin.latitude, origin.longitude + (meters / radius).to_degrees())
}

/// Point reached by travelling `meters` due north along the meridian of `origin`.
pub fn offset_north(origin: &GpsPoint, meters: f64) -> GpsPoint {
    GpsPoint::new(
        origin.latitude + (meters / EARTH_RADIUS_METERS).to_degrees(),
        origin.longitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = GpsPoint::new(51.5074, -0.1278);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_known_value() {
        // London to Paris is approximately 344 km
        let london = GpsPoint::new(51.5074, -0.1278);
        let paris = GpsPoint::new(48.8566, 2.3522);
        let dist = haversine_distance(&london, &paris);
        assert!((dist - 343_560.0).abs() < 5000.0);
    }

    #[test]
    fn test_equator_hundredth_degree() {
        let a = GpsPoint::new(0.0, 0.0);
        let b = GpsPoint::new(0.0, 0.01);
        let dist = haversine_distance(&a, &b);
        assert!((dist - 1111.95).abs() < 0.1, "got {}", dist);
    }

    #[test]
    fn test_offsets_round_trip_distance() {
        let origin = GpsPoint::new(0.0, 0.0);
        let east = offset_east(&origin, 2400.0);
        assert!((haversine_distance(&origin, &east) - 2400.0).abs() < 1e-6);

        let origin = GpsPoint::new(47.37, 8.55);
        let north = offset_north(&origin, 500.0);
        assert!((haversine_distance(&origin, &north) - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_polyline_length() {
        let points = vec![
            GpsPoint::new(0.0, 0.0),
            GpsPoint::new(0.0, 0.01),
            GpsPoint::new(0.0, 0.02),
        ];
        assert!((polyline_length(&points) - 2223.9).abs() < 0.2);
        assert_eq!(polyline_length(&points[..1]), 0.0);
    }
}
