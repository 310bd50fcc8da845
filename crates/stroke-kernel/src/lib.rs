pub mod geometry;
pub mod easing;
pub mod error;
pub mod resample;
pub mod align;
pub mod metrics;
pub mod accuracy;
pub mod outline;

// Re-export the comparator and outline entry points at crate root.
pub use accuracy::{
    evaluate_accuracy, evaluate_accuracy_with, score_breakdown, try_evaluate_accuracy,
    DefaultComparator, Gate, MetricScores, MetricWeights, PassScore, ScoreBreakdown,
    ScoringConfig, StrokeComparator,
};
pub use easing::{CubicBezier, Easing, ParseEasingError};
pub use error::{StrokeError, StrokeRole};
pub use geometry::{points_from_pairs, BoundingBox2d, Point2d, Vec2};
pub use outline::{get_outline, to_path, OutlineOptions, PathCommand, Taper, TaperOptions};

/// An ordered pen-down sequence of points.
pub type Stroke = Vec<Point2d>;
