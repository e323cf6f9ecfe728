//! # Path Preprocessing
//!
//! Trail cleaning, uniform resampling and boundary densification.
//!
//! Raw GPS trails arrive with stationary duplicates and bursts of samples;
//! boundaries arrive with as few as three vertices. Both sides are brought
//! to a comparable sample density before any distance query runs:
//!
//! - [`clean_trail`] drops invalid samples and consecutive exact duplicates
//! - [`resample`] re-emits a polyline at uniform arc-length spacing
//! - [`densify`] inserts evenly spaced interior points along long boundary
//!   edges, so a 3-vertex triangle still yields dozens of coverage samples
//!
//! Without densification, a sparse shape would be scored on its corners
//! alone and a trail cutting across the interior would grade the same as
//! one tracing the edges.

use crate::projection::PlanarPoint;
use crate::GpsPoint;

/// Drop invalid samples and consecutive exact duplicates, preserving order.
///
/// Stationary players produce long runs of identical coordinates; exact
/// equality is the right test because repeated GPS fixes repeat bit-for-bit
/// while genuine movement never does.
pub fn clean_trail(points: &[GpsPoint]) -> Vec<GpsPoint> {
    let mut out: Vec<GpsPoint> = Vec::with_capacity(points.len());
    for p in points {
        if !p.is_valid() {
            continue;
        }
        if let Some(last) = out.last() {
            if last.latitude == p.latitude && last.longitude == p.longitude {
                continue;
            }
        }
        out.push(*p);
    }
    out
}

/// Re-emit a polyline at uniform arc-length spacing.
///
/// Walks the input accumulating traversed distance and emits a point every
/// `step_meters`, continuing from the last emitted point along the current
/// segment's direction. Leftover distance carries across segment
/// boundaries; zero-length segments are skipped without resetting the
/// accumulator. The first output point is the first input point.
pub fn resample(points: &[PlanarPoint], step_meters: f64) -> Vec<PlanarPoint> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut out = vec![points[0]];
    // Distance traversed since the last emitted sample
    let mut acc = 0.0;

    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        let seg_len = a.distance_to(&b);
        if seg_len == 0.0 {
            continue;
        }
        let ux = (b.x - a.x) / seg_len;
        let uy = (b.y - a.y) / seg_len;

        // Distance along this segment already consumed by emissions
        let mut consumed = 0.0;
        while acc + (seg_len - consumed) >= step_meters {
            consumed += step_meters - acc;
            out.push(PlanarPoint::new(a.x + ux * consumed, a.y + uy * consumed));
            acc = 0.0;
        }
        acc += seg_len - consumed;
    }
    out
}

/// Insert evenly spaced interior points along each boundary edge.
///
/// For every edge longer than `step_meters`, emits the edge's start vertex
/// followed by `floor(len / step) - 1` interior points. When `closed`, the
/// edge from the final vertex back to the first is included and the final
/// vertex is not re-emitted; when open, iteration stops at the last edge
/// and the final vertex is appended.
pub fn densify(points: &[PlanarPoint], step_meters: f64, closed: bool) -> Vec<PlanarPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let n = points.len();
    let max_idx = if closed { n } else { n - 1 };
    let mut out = Vec::new();

    for i in 0..max_idx {
        let a = points[i];
        let b = points[(i + 1) % n];
        out.push(a);

        let seg_len = a.distance_to(&b);
        if seg_len > step_meters {
            let steps = (seg_len / step_meters).floor() as usize;
            for s in 1..steps {
                let t = s as f64 / steps as f64;
                out.push(PlanarPoint::new(
                    a.x + (b.x - a.x) * t,
                    a.y + (b.y - a.y) * t,
                ));
            }
        }
    }

    if !closed {
        out.push(points[n - 1]);
    }
    out
}
