use serde::{Deserialize, Serialize};

use super::point::Point2d;

/// Axis-aligned bounding box in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2d {
    pub min: Point2d,
    pub max: Point2d,
}

impl BoundingBox2d {
    pub fn new(min: Point2d, max: Point2d) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point2d::new(f64::INFINITY, f64::INFINITY),
            max: Point2d::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points(points: &[Point2d]) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.expand_to_include(p);
        }
        bb
    }

    pub fn expand_to_include(&mut self, p: &Point2d) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max.x - self.min.x }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max.y - self.min.y }
    }

    /// The longer of the two sides.
    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn center(&self) -> Point2d {
        self.min.midpoint(&self.max)
    }

    pub fn contains(&self, p: &Point2d) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
