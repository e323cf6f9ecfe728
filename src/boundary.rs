//! # Boundary Builder
//!
//! Builds the ordered outline vertices for a target shape.
//!
//! Parametric shapes (square, triangle, star, circle) are generated around
//! the template center at the template radius; catalog shapes scale stored
//! unit vertices by the radius; freehand polygons pass through verbatim.
//! The output is in geographic coordinates - projection and densification
//! happen later in the scoring pipeline, because they need the per-run
//! origin and step configuration.
//!
//! A shape that cannot be anchored (missing or non-positive radius,
//! non-finite center) yields an empty boundary, which the scoring model
//! reports as a soft zero.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::projection::{meters_per_degree_lng, METERS_PER_DEGREE_LAT};
use crate::{GeoPoint, ScoreConfig, ShapeKind, ShapeTemplate, UnitVertex};

/// Build the ordered boundary vertices for a resolved shape.
///
/// Returns an empty vector when the shape has no valid anchor. Closed-ness
/// is a property of the template ([`ShapeTemplate::is_closed`]), not of
/// the vertex list: the last vertex never repeats the first.
pub fn build_boundary(template: &ShapeTemplate, config: &ScoreConfig) -> Vec<GeoPoint> {
    match template {
        ShapeTemplate::Polygon { vertices } => vertices.clone(),
        ShapeTemplate::Parametric {
            kind,
            center,
            radius_meters,
        } => {
            let Some((d_lat, d_lng)) = degree_deltas(center, *radius_meters) else {
                return Vec::new();
            };
            match kind {
                ShapeKind::Square => square_vertices(center, d_lat, d_lng),
                ShapeKind::Triangle => triangle_vertices(center, d_lat, d_lng),
                ShapeKind::Star => star_vertices(center, d_lat, d_lng, config.star_inner_ratio),
                ShapeKind::Circle => circle_vertices(center, d_lat, d_lng, config.circle_segments),
            }
        }
        ShapeTemplate::Catalog {
            center,
            radius_meters,
            base_vertices,
        } => {
            let Some((d_lat, d_lng)) = degree_deltas(center, *radius_meters) else {
                return Vec::new();
            };
            base_vertices
                .iter()
                .map(|v| scale_unit_vertex(v, center, d_lat, d_lng))
                .collect()
        }
    }
}

/// Degree offsets spanning the radius at the template center, or `None`
/// when the center/radius cannot anchor a shape.
fn degree_deltas(center: &GeoPoint, radius_meters: f64) -> Option<(f64, f64)> {
    if !center.lat.is_finite() || !center.lng.is_finite() {
        return None;
    }
    if !(radius_meters > 0.0) {
        return None;
    }
    let d_lat = radius_meters / METERS_PER_DEGREE_LAT;
    let d_lng = radius_meters / meters_per_degree_lng(center.lat);
    Some((d_lat, d_lng))
}

/// Four corners, winding NW -> NE -> SE -> SW.
fn square_vertices(center: &GeoPoint, d_lat: f64, d_lng: f64) -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(center.lat + d_lat, center.lng - d_lng),
        GeoPoint::new(center.lat + d_lat, center.lng + d_lng),
        GeoPoint::new(center.lat - d_lat, center.lng + d_lng),
        GeoPoint::new(center.lat - d_lat, center.lng - d_lng),
    ]
}

/// Apex at the top, base corners below, winding top -> right -> left.
fn triangle_vertices(center: &GeoPoint, d_lat: f64, d_lng: f64) -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(center.lat + d_lat, center.lng),
        GeoPoint::new(center.lat - d_lat, center.lng + d_lng),
        GeoPoint::new(center.lat - d_lat, center.lng - d_lng),
    ]
}

/// Five-point star: 10 alternating outer/inner vertices, starting at the
/// top and proceeding clockwise every 36 degrees.
fn star_vertices(center: &GeoPoint, d_lat: f64, d_lng: f64, inner_ratio: f64) -> Vec<GeoPoint> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { 1.0 } else { inner_ratio };
            let ang = FRAC_PI_2 - (i as f64) * PI / 5.0;
            GeoPoint::new(
                center.lat + r * d_lat * ang.sin(),
                center.lng + r * d_lng * ang.cos(),
            )
        })
        .collect()
}

/// Evenly angled points at full radius approximating a circle.
fn circle_vertices(center: &GeoPoint, d_lat: f64, d_lng: f64, segments: u32) -> Vec<GeoPoint> {
    let n = segments.max(3);
    (0..n)
        .map(|i| {
            let ang = TAU * (i as f64) / (n as f64);
            GeoPoint::new(
                center.lat + d_lat * ang.sin(),
                center.lng + d_lng * ang.cos(),
            )
        })
        .collect()
}

fn scale_unit_vertex(v: &UnitVertex, center: &GeoPoint, d_lat: f64, d_lng: f64) -> GeoPoint {
    GeoPoint::new(center.lat + v.y * d_lat, center.lng + v.x * d_lng)
}
