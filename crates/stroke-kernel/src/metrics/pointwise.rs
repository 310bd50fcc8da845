use crate::geometry::Point2d;
use crate::geometry::polyline::path_length;

use super::distance_to_score;

/// Score from the root of the mean squared distance between paired points.
pub fn mse_score(a: &[Point2d], b: &[Point2d]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let mse = a
        .iter()
        .zip(b)
        .map(|(p, q)| p.distance_squared_to(q))
        .sum::<f64>()
        / n as f64;
    distance_to_score(mse.sqrt())
}

/// Score from the average of the start-to-start and end-to-end distances.
pub fn endpoint_score(a: &[Point2d], b: &[Point2d]) -> f64 {
    match (a.first(), a.last(), b.first(), b.last()) {
        (Some(a0), Some(an), Some(b0), Some(bn)) => {
            distance_to_score((a0.distance_to(b0) + an.distance_to(bn)) * 0.5)
        }
        _ => 0.0,
    }
}

/// Ratio of the shorter path length to the longer one.
pub fn length_ratio_score(a: &[Point2d], b: &[Point2d]) -> f64 {
    let (la, lb) = (path_length(a), path_length(b));
    let longer = la.max(lb);
    if longer <= 0.0 {
        return 0.0;
    }
    la.min(lb) / longer
}

/// Cosine between the net start-to-end vectors of two strokes.
///
/// `None` when either stroke ends within `min_length` of where it started
/// (closed loops have no net direction).
pub fn direction_cosine(a: &[Point2d], b: &[Point2d], min_length: f64) -> Option<f64> {
    let net = |s: &[Point2d]| match (s.first(), s.last()) {
        (Some(first), Some(last)) => Some(*last - *first),
        _ => None,
    };
    let (va, vb) = (net(a)?, net(b)?);
    if va.length() < min_length || vb.length() < min_length {
        return None;
    }
    va.cosine_to(&vb)
}
