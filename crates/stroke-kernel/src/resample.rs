//! Canonical forms of a stroke: arc-length resampling and unit-box
//! normalization.

use crate::geometry::polyline::cumulative_lengths;
use crate::geometry::{BoundingBox2d, Point2d};

/// Resample a polyline to `count` points spaced evenly by arc length.
///
/// The first and last output points are the polyline's endpoints. A
/// zero-length polyline yields `count` copies of its first point.
pub fn resample_by_arc_length(points: &[Point2d], count: usize) -> Vec<Point2d> {
    if points.is_empty() || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![points[0]];
    }

    let dists = cumulative_lengths(points);
    let total = dists[dists.len() - 1];
    if points.len() == 1 || total <= 0.0 {
        return vec![points[0]; count];
    }

    let last = points.len() - 1;
    let mut out = Vec::with_capacity(count);
    let mut seg = 1;
    for i in 0..count {
        let target = total * i as f64 / (count - 1) as f64;
        while seg < last && dists[seg] < target {
            seg += 1;
        }
        let span = dists[seg] - dists[seg - 1];
        let t = if span > 0.0 {
            ((target - dists[seg - 1]) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        out.push(points[seg - 1].lerp(&points[seg], t));
    }
    out[0] = points[0];
    out[count - 1] = points[last];
    out
}

/// Translate the bounding box's min corner to the origin and scale
/// uniformly so the longer side is 1.
///
/// Strokes with no extent are only translated.
pub fn normalize_to_unit_box(points: &[Point2d]) -> Vec<Point2d> {
    let bb = BoundingBox2d::from_points(points);
    if bb.is_empty() {
        return Vec::new();
    }
    let extent = bb.max_extent();
    let scale = if extent > 1e-12 { 1.0 / extent } else { 1.0 };
    points
        .iter()
        .map(|p| Point2d::new((p.x - bb.min.x) * scale, (p.y - bb.min.y) * scale))
        .collect()
}

/// Linearly resample a scalar series to `count` values by index.
pub fn resample_series(values: &[f64], count: usize) -> Vec<f64> {
    match (values.len(), count) {
        (_, 0) => Vec::new(),
        (0, _) => vec![0.0; count],
        (1, _) => vec![values[0]; count],
        (_, 1) => vec![values[0]],
        (len, _) => {
            let span = (len - 1) as f64;
            (0..count)
                .map(|i| {
                    let pos = span * i as f64 / (count - 1) as f64;
                    let lo = (pos.floor() as usize).min(len - 1);
                    let hi = (lo + 1).min(len - 1);
                    let frac = pos - lo as f64;
                    values[lo] + (values[hi] - values[lo]) * frac
                })
                .collect()
        }
    }
}
