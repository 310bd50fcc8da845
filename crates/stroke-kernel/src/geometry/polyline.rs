//! Helpers over ordered point sequences.

use super::point::Point2d;

/// Sum of consecutive segment lengths.
pub fn path_length(points: &[Point2d]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Running arc length at each point, starting with 0.
pub fn cumulative_lengths(points: &[Point2d]) -> Vec<f64> {
    let mut dists = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += points[i - 1].distance_to(p);
        }
        dists.push(total);
    }
    dists
}

/// Arithmetic mean of the points; the origin for an empty slice.
pub fn centroid(points: &[Point2d]) -> Point2d {
    if points.is_empty() {
        return Point2d::ORIGIN;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2d::new(sx / n, sy / n)
}

pub fn reversed(points: &[Point2d]) -> Vec<Point2d> {
    points.iter().rev().copied().collect()
}

pub fn translated(points: &[Point2d], dx: f64, dy: f64) -> Vec<Point2d> {
    points.iter().map(|p| Point2d::new(p.x + dx, p.y + dy)).collect()
}

/// Uniform scale about the origin.
pub fn scaled(points: &[Point2d], k: f64) -> Vec<Point2d> {
    points.iter().map(|p| Point2d::new(p.x * k, p.y * k)).collect()
}
