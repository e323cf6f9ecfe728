//! # Geographic Utilities
//!
//! Great-circle trail statistics reported alongside the scores.
//!
//! The scoring model itself works in the projected planar frame; these
//! helpers operate on raw geographic samples and feed the results surface
//! (how far each brush actually walked during the game).

use crate::GpsPoint;
use geo::{Distance, Haversine, Point};

/// Great-circle distance between two trail samples, in meters.
///
/// Assumes a spherical Earth; accurate to within 0.3% for GPS work.
#[inline]
pub fn haversine_distance(p1: &GpsPoint, p2: &GpsPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Total walked length of a trail, in meters.
///
/// Sums the haversine distance between consecutive samples. Empty or
/// single-sample trails return 0.0.
pub fn trail_length(points: &[GpsPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_haversine_distance_same_point() {
        let p = GpsPoint::new(51.5074, -0.1278);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_distance_known_value() {
        // London to Paris is approximately 344 km
        let london = GpsPoint::new(51.5074, -0.1278);
        let paris = GpsPoint::new(48.8566, 2.3522);
        let dist = haversine_distance(&london, &paris);
        assert!(approx_eq(dist, 343_560.0, 5000.0));
    }

    #[test]
    fn test_trail_length_degenerate() {
        assert_eq!(trail_length(&[]), 0.0);
        assert_eq!(trail_length(&[GpsPoint::new(51.5074, -0.1278)]), 0.0);
    }

    #[test]
    fn test_trail_length_sums_segments() {
        // Two hops of ~111m each along a meridian
        let trail = vec![
            GpsPoint::new(0.000, 0.0),
            GpsPoint::new(0.001, 0.0),
            GpsPoint::new(0.002, 0.0),
        ];
        let length = trail_length(&trail);
        assert!(approx_eq(length, 222.4, 1.0));
    }
}
