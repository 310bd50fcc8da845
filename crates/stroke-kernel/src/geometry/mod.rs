pub mod bounds;
pub mod point;
pub mod polyline;
pub mod vector;

pub use bounds::BoundingBox2d;
pub use point::{points_from_pairs, Point2d};
pub use vector::Vec2;
