use crate::geometry::Point2d;

use super::distance_to_score;

/// Largest distance from a point of `from` to its nearest point in `to`.
pub fn directed_hausdorff(from: &[Point2d], to: &[Point2d]) -> f64 {
    if from.is_empty() || to.is_empty() {
        return f64::INFINITY;
    }
    from.iter()
        .map(|p| {
            to.iter()
                .map(|q| p.distance_squared_to(q))
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
        .sqrt()
}

/// Symmetric Hausdorff distance between two point sets.
pub fn hausdorff_distance(a: &[Point2d], b: &[Point2d]) -> f64 {
    directed_hausdorff(a, b).max(directed_hausdorff(b, a))
}

pub fn hausdorff_score(a: &[Point2d], b: &[Point2d]) -> f64 {
    distance_to_score(hausdorff_distance(a, b))
}
