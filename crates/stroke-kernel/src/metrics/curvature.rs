//! Turning-angle signatures.
//!
//! A stroke's signature is its turning function: the heading change between
//! consecutive segments, accumulated from the first segment, resampled to a
//! fixed length and z-normalized. Accumulating keeps the position of a
//! corner and the total winding of a loop visible after normalization.

use std::f64::consts::{PI, TAU};

use crate::geometry::Point2d;
use crate::resample::resample_series;

/// Wrap an angle difference into (-PI, PI].
fn wrap_angle(mut a: f64) -> f64 {
    while a <= -PI {
        a += TAU;
    }
    while a > PI {
        a -= TAU;
    }
    a
}

/// Cumulative turning angle at each segment, starting at 0.
///
/// Zero-length segments carry no heading and are skipped.
pub fn turning_angles(points: &[Point2d]) -> Vec<f64> {
    let headings: Vec<f64> = points
        .windows(2)
        .filter_map(|w| {
            let d = w[1] - w[0];
            (d.length_squared() > 0.0).then(|| d.heading())
        })
        .collect();

    let mut total = 0.0;
    let mut out = Vec::with_capacity(headings.len());
    for (i, h) in headings.iter().enumerate() {
        if i > 0 {
            total += wrap_angle(h - headings[i - 1]);
        }
        out.push(total);
    }
    out
}

/// Subtract the mean and divide by the standard deviation.
///
/// The divisor never drops below `std_floor`, so an almost-straight
/// stroke's jitter is not blown up to unit variance.
pub fn z_normalize(values: &[f64], std_floor: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let divisor = var.sqrt().max(std_floor).max(f64::MIN_POSITIVE);
    values.iter().map(|v| (v - mean) / divisor).collect()
}

/// Normalized turning signature of `length` samples.
pub fn turning_signature(points: &[Point2d], length: usize, std_floor: f64) -> Vec<f64> {
    let angles = turning_angles(points);
    z_normalize(&resample_series(&angles, length), std_floor)
}

/// Mean absolute difference between two signatures as a score.
pub fn curvature_score(a: &[Point2d], b: &[Point2d], length: usize, std_floor: f64) -> f64 {
    if length == 0 {
        return 0.0;
    }
    let sa = turning_signature(a, length, std_floor);
    let sb = turning_signature(b, length, std_floor);
    let diff = sa.iter().zip(&sb).map(|(x, y)| (x - y).abs()).sum::<f64>() / length as f64;
    if !diff.is_finite() {
        return 0.0;
    }
    (1.0 - diff.min(1.0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resample::resample_by_arc_length;

    fn circle(n: usize) -> Vec<Point2d> {
        (0..=n)
            .map(|i| {
                let a = TAU * i as f64 / n as f64;
                Point2d::new(a.cos(), a.sin())
            })
            .collect()
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
        assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-12);
        assert!((wrap_angle(PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_right_angle_turn() {
        let pts = [Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0), Point2d::new(1.0, 1.0)];
        let t = turning_angles(&pts);
        assert_eq!(t.len(), 2);
        assert!((t[1] - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_accumulates_full_turn() {
        let t = turning_angles(&circle(64));
        assert!((t[t.len() - 1] - TAU * 63.0 / 64.0).abs() < 1e-9);
    }

    #[test]
    fn test_straight_line_signature_is_flat() {
        let line = resample_by_arc_length(&[Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.3)], 96);
        let sig = turning_signature(&line, 48, 0.2);
        assert!(sig.iter().all(|v| v.abs() < 1e-9));
    }

    #[test]
    fn test_same_shape_scores_one() {
        let c = circle(40);
        assert!((curvature_score(&c, &c, 48, 0.2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_line_versus_loop_scores_low() {
        let line = resample_by_arc_length(&[Point2d::new(-1.0, 0.0), Point2d::new(1.0, 0.0)], 96);
        let loop_pts = resample_by_arc_length(&circle(64), 96);
        assert!(curvature_score(&line, &loop_pts, 48, 0.2) < 0.2);
    }

    #[test]
    fn test_z_normalize_floor() {
        let z = z_normalize(&[0.0, 0.01, 0.0, 0.01], 0.2);
        assert!(z.iter().all(|v| v.abs() <= 0.025 + 1e-12));
        let z = z_normalize(&[0.0, 2.0], 0.2);
        assert!((z[0] + 1.0).abs() < 1e-12 && (z[1] - 1.0).abs() < 1e-12);
    }
}
