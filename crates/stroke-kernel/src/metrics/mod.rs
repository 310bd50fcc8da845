//! Similarity metrics between two aligned strokes.
//!
//! Distances are in normalized units (unit bounding box), so each maps onto
//! a score in [0, 1] where 1 means identical.

pub mod curvature;
pub mod dtw;
pub mod hausdorff;
pub mod pointwise;

pub use curvature::{curvature_score, turning_signature};
pub use dtw::{dtw_distance, dtw_score};
pub use hausdorff::{hausdorff_distance, hausdorff_score};
pub use pointwise::{direction_cosine, endpoint_score, length_ratio_score, mse_score};

/// `max(0, 1 - distance)`, with non-finite distances scoring 0.
pub(crate) fn distance_to_score(distance: f64) -> f64 {
    if distance.is_finite() {
        (1.0 - distance).max(0.0)
    } else {
        0.0
    }
}
