//! Centering and least-squares rotation between two equal-length point sets.

use nalgebra::Rotation2;

use crate::geometry::polyline::centroid;
use crate::geometry::{Point2d, Vec2};

/// Translate points so their centroid sits at the origin.
pub fn center_on_centroid(points: &[Point2d]) -> Vec<Point2d> {
    let c = centroid(points);
    points.iter().map(|p| Point2d::new(p.x - c.x, p.y - c.y)).collect()
}

/// Angle that rotates `source` onto `target` with least squared error.
///
/// Both sets must already be centered and paired index by index. This is
/// the rotational part of orthogonal Procrustes in closed form.
pub fn best_fit_rotation(source: &[Point2d], target: &[Point2d]) -> f64 {
    let (dot, cross) = source
        .iter()
        .zip(target)
        .fold((0.0, 0.0), |(dot, cross), (s, t)| {
            let (s, t) = (s.to_vec2(), t.to_vec2());
            (dot + s.dot(&t), cross + s.cross(&t))
        });
    if dot == 0.0 && cross == 0.0 {
        return 0.0;
    }
    cross.atan2(dot)
}

/// Rotate points about the origin.
pub fn rotate_points(points: &[Point2d], angle: f64) -> Vec<Point2d> {
    let rotation = Rotation2::new(angle);
    points
        .iter()
        .map(|p| {
            let v = Vec2::from(rotation * p.to_vec2().to_nalgebra());
            Point2d::new(v.x, v.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> Vec<Point2d> {
        center_on_centroid(&[
            Point2d::new(0.0, 0.0),
            Point2d::new(4.0, 0.0),
            Point2d::new(1.0, 3.0),
        ])
    }

    #[test]
    fn test_centered_has_zero_centroid() {
        let c = centroid(&triangle());
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_recovers_known_rotation() {
        let target = triangle();
        let source = rotate_points(&target, 0.7);
        let angle = best_fit_rotation(&source, &target);
        assert_relative_eq!(angle, -0.7, epsilon = 1e-9);

        let aligned = rotate_points(&source, angle);
        for (a, t) in aligned.iter().zip(&target) {
            assert_relative_eq!(a.x, t.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, t.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_identical_sets_need_no_rotation() {
        let t = triangle();
        assert_relative_eq!(best_fit_rotation(&t, &t), 0.0, epsilon = 1e-12);
    }
}
