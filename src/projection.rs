//! # Planar Projection
//!
//! Converts geographic coordinates into a local planar frame in meters.
//!
//! The engine compares trails and boundaries with Euclidean geometry, so
//! every scoring run first projects its points into an (x, y) frame
//! anchored at a single origin (the template center, or the first boundary
//! vertex). The projection is equirectangular: latitude maps linearly to
//! meters, longitude scales with the cosine of the origin latitude. That
//! is not geodesically exact, but within the tens-to-low-thousands of
//! meters a game spans the error is far below GPS noise.
//!
//! The scale factor for longitude approaches zero toward the poles;
//! extreme latitudes are outside the engine's operating envelope and are
//! not guarded against.

use crate::GeoPoint;

/// Meters per degree of latitude (equirectangular approximation).
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// A point in the local planar frame, in meters relative to the run origin.
///
/// Derived during scoring and never serialized; every run recomputes its
/// own planar copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another planar point, in meters.
    #[inline]
    pub fn distance_to(&self, other: &PlanarPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Meters per degree of longitude at the given latitude.
#[inline]
pub fn meters_per_degree_lng(lat: f64) -> f64 {
    METERS_PER_DEGREE_LAT * lat.to_radians().cos().abs()
}

/// Project a geographic point into the planar frame anchored at `origin`.
#[inline]
pub fn to_planar(p: &GeoPoint, origin: &GeoPoint) -> PlanarPoint {
    PlanarPoint::new(
        (p.lng - origin.lng) * meters_per_degree_lng(origin.lat),
        (p.lat - origin.lat) * METERS_PER_DEGREE_LAT,
    )
}

/// Inverse of [`to_planar`] for the same origin.
#[inline]
pub fn to_geo(p: &PlanarPoint, origin: &GeoPoint) -> GeoPoint {
    GeoPoint::new(
        origin.lat + p.y / METERS_PER_DEGREE_LAT,
        origin.lng + p.x / meters_per_degree_lng(origin.lat),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_origin_projects_to_zero() {
        let origin = GeoPoint::new(51.5074, -0.1278);
        let p = to_planar(&origin, &origin);
        assert_eq!(p, PlanarPoint::new(0.0, 0.0));
    }

    #[test]
    fn test_one_degree_latitude() {
        let origin = GeoPoint::new(0.0, 0.0);
        let p = to_planar(&GeoPoint::new(1.0, 0.0), &origin);
        assert_eq!(p.y, METERS_PER_DEGREE_LAT);
        assert_eq!(p.x, 0.0);
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        // At 60N a degree of longitude is half a degree at the equator
        let at_equator = meters_per_degree_lng(0.0);
        let at_sixty = meters_per_degree_lng(60.0);
        assert!(approx_eq(at_sixty / at_equator, 0.5, 1e-9));
    }

    #[test]
    fn test_southern_hemisphere_scale_positive() {
        assert!(meters_per_degree_lng(-45.0) > 0.0);
        assert!(approx_eq(
            meters_per_degree_lng(-45.0),
            meters_per_degree_lng(45.0),
            1e-9
        ));
    }

    #[test]
    fn test_round_trip_recovers_coordinates() {
        let origin = GeoPoint::new(59.3293, 18.0686); // Stockholm
        let p = GeoPoint::new(59.3301, 18.0702);
        let back = to_geo(&to_planar(&p, &origin), &origin);
        assert!(approx_eq(back.lat, p.lat, 1e-12));
        assert!(approx_eq(back.lng, p.lng, 1e-12));
    }

    #[test]
    fn test_planar_distance() {
        let a = PlanarPoint::new(0.0, 0.0);
        let b = PlanarPoint::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
