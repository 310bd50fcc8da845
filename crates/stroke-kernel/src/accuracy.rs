//! Stroke accuracy: how closely a user-drawn stroke reproduces a reference.
//!
//! Both strokes are resampled by arc length, normalized into a unit box,
//! centered and rotation-aligned, then scored by a weighted blend of six
//! metrics:
//! - **DTW** (banded dynamic time warping over the aligned sequences)
//! - **Hausdorff** (worst nearest-neighbour gap)
//! - **MSE** (paired points after alignment)
//! - **Curvature** (turning-function signatures)
//! - **Endpoint** (start and end placement)
//! - **Length ratio** (total travel)
//!
//! Hausdorff and curvature also act as hard gates, and the blend is damped
//! when the net drawing direction disagrees. The whole pass runs again on
//! the reversed user stroke with a small penalty; the better pass wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{StrokeError, StrokeRole};
use crate::geometry::Point2d;
use crate::geometry::polyline::{path_length, reversed};
use crate::metrics;
use crate::resample::{normalize_to_unit_box, resample_by_arc_length};
use crate::align::{best_fit_rotation, center_on_centroid, rotate_points};

/// Blend weights of the per-metric scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricWeights {
    pub dtw: f64,
    pub hausdorff: f64,
    pub mse: f64,
    pub curvature: f64,
    pub endpoint: f64,
    pub length_ratio: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            dtw: 0.30,
            hausdorff: 0.25,
            mse: 0.20,
            curvature: 0.15,
            endpoint: 0.07,
            length_ratio: 0.03,
        }
    }
}

impl MetricWeights {
    pub fn sum(&self) -> f64 {
        self.dtw + self.hausdorff + self.mse + self.curvature + self.endpoint + self.length_ratio
    }

    fn as_array(&self) -> [f64; 6] {
        [
            self.dtw,
            self.hausdorff,
            self.mse,
            self.curvature,
            self.endpoint,
            self.length_ratio,
        ]
    }
}

/// Parameters of the scoring pipeline.
///
/// The defaults are the tuned reference values; acceptance thresholds
/// downstream assume them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per stroke after arc-length resampling.
    pub resample_count: usize,
    /// Samples in a turning-angle signature.
    pub signature_length: usize,
    /// DTW band half-width as a fraction of the longer sequence.
    pub dtw_window_fraction: f64,
    /// Normalized path length below which a stroke cannot be scored.
    pub degenerate_length: f64,
    /// Hausdorff score below which the result is forced to 0.
    pub hausdorff_gate: f64,
    /// Curvature score below which the result is forced to 0.
    pub curvature_gate: f64,
    /// Lower bound of the signature standard deviation (radians).
    pub curvature_std_floor: f64,
    /// Multiplier applied to the reversed-direction pass.
    pub reverse_penalty: f64,
    /// Direction factor at cosine <= 0.
    pub direction_base: f64,
    /// Direction factor gain per unit of (clamped) cosine.
    pub direction_gain: f64,
    pub weights: MetricWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            resample_count: 96,
            signature_length: 48,
            dtw_window_fraction: 0.15,
            degenerate_length: 1e-3,
            hausdorff_gate: 0.2,
            curvature_gate: 0.2,
            curvature_std_floor: 0.2,
            reverse_penalty: 0.9,
            direction_base: 0.6,
            direction_gain: 0.4,
            weights: MetricWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// Same pipeline with different blend weights.
    pub fn with_weights(weights: MetricWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), StrokeError> {
        let invalid = |reason: &str| {
            Err(StrokeError::InvalidConfig {
                reason: reason.to_string(),
            })
        };
        if self.resample_count < 2 {
            return invalid("resample_count must be at least 2");
        }
        if self.signature_length < 2 {
            return invalid("signature_length must be at least 2");
        }
        if !(0.0..=1.0).contains(&self.dtw_window_fraction) {
            return invalid("dtw_window_fraction must lie in [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.reverse_penalty) {
            return invalid("reverse_penalty must lie in [0, 1]");
        }
        if !self.degenerate_length.is_finite() || self.degenerate_length < 0.0 {
            return invalid("degenerate_length must be a non-negative number");
        }
        if !self.curvature_std_floor.is_finite() || self.curvature_std_floor < 0.0 {
            return invalid("curvature_std_floor must be a non-negative number");
        }
        if !(self.hausdorff_gate.is_finite() && self.curvature_gate.is_finite()) {
            return invalid("gate thresholds must be finite");
        }
        if !(self.direction_base.is_finite() && self.direction_gain.is_finite()) {
            return invalid("direction factor terms must be finite");
        }
        if self.weights.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return invalid("metric weights must be non-negative numbers");
        }
        Ok(())
    }
}

/// Why a pass scored 0 without blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    TooFewPoints,
    Degenerate,
    Hausdorff,
    Curvature,
}

/// Per-metric scores of one pass, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub dtw: f64,
    pub hausdorff: f64,
    pub mse: f64,
    pub curvature: f64,
    pub endpoint: f64,
    pub length_ratio: f64,
}

impl MetricScores {
    pub fn weighted(&self, w: &MetricWeights) -> f64 {
        w.dtw * self.dtw
            + w.hausdorff * self.hausdorff
            + w.mse * self.mse
            + w.curvature * self.curvature
            + w.endpoint * self.endpoint
            + w.length_ratio * self.length_ratio
    }
}

/// Result of scoring one orientation of the user stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassScore {
    pub metrics: Option<MetricScores>,
    pub gate: Option<Gate>,
    pub direction_factor: f64,
    /// Final pass score, penalty included.
    pub score: f64,
}

impl PassScore {
    fn gated(gate: Gate, metrics: Option<MetricScores>) -> Self {
        Self {
            metrics,
            gate: Some(gate),
            direction_factor: 1.0,
            score: 0.0,
        }
    }
}

/// Both passes of an evaluation and the winning score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub forward: PassScore,
    pub reversed: PassScore,
    pub used_reversed: bool,
    pub score: f64,
}

impl ScoreBreakdown {
    fn degenerate() -> Self {
        let pass = PassScore::gated(Gate::TooFewPoints, None);
        Self {
            forward: pass,
            reversed: pass,
            used_reversed: false,
            score: 0.0,
        }
    }

    /// The pass that produced `score`.
    pub fn winning_pass(&self) -> &PassScore {
        if self.used_reversed { &self.reversed } else { &self.forward }
    }
}

/// Something that scores a user stroke against a reference.
pub trait StrokeComparator {
    /// Score in [0, 1]; 0 for degenerate or malformed input.
    fn evaluate(&self, user: &[Point2d], target: &[Point2d]) -> f64;

    /// Like `evaluate`, but reports malformed input instead of scoring it 0.
    fn try_evaluate(&self, user: &[Point2d], target: &[Point2d]) -> Result<f64, StrokeError> {
        Ok(self.evaluate(user, target))
    }
}

/// The standard multi-metric comparator.
#[derive(Debug, Clone, Default)]
pub struct DefaultComparator {
    pub config: ScoringConfig,
}

impl DefaultComparator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

impl StrokeComparator for DefaultComparator {
    fn evaluate(&self, user: &[Point2d], target: &[Point2d]) -> f64 {
        evaluate_accuracy_with(user, target, &self.config)
    }

    fn try_evaluate(&self, user: &[Point2d], target: &[Point2d]) -> Result<f64, StrokeError> {
        try_evaluate_accuracy(user, target, &self.config)
    }
}

/// Score `user` against `target` with the reference parameters.
pub fn evaluate_accuracy(user: &[Point2d], target: &[Point2d]) -> f64 {
    evaluate_accuracy_with(user, target, &ScoringConfig::default())
}

/// Score `user` against `target`. Never fails: malformed input scores 0.
pub fn evaluate_accuracy_with(user: &[Point2d], target: &[Point2d], config: &ScoringConfig) -> f64 {
    match try_evaluate_accuracy(user, target, config) {
        Ok(score) => score,
        Err(err) => {
            warn!(error = %err, "stroke evaluation failed, scoring as 0");
            0.0
        }
    }
}

/// Score `user` against `target`, reporting malformed input as an error.
pub fn try_evaluate_accuracy(
    user: &[Point2d],
    target: &[Point2d],
    config: &ScoringConfig,
) -> Result<f64, StrokeError> {
    score_breakdown(user, target, config).map(|b| b.score)
}

/// Full per-pass, per-metric detail of an evaluation.
#[instrument(skip_all, fields(user_len = user.len(), target_len = target.len()))]
pub fn score_breakdown(
    user: &[Point2d],
    target: &[Point2d],
    config: &ScoringConfig,
) -> Result<ScoreBreakdown, StrokeError> {
    config.validate()?;
    check_finite(user, StrokeRole::User)?;
    check_finite(target, StrokeRole::Target)?;

    if user.len() < 2 || target.len() < 2 {
        debug!("fewer than two points, scoring as 0");
        return Ok(ScoreBreakdown::degenerate());
    }

    let forward = score_pass(user, target, config);
    let mut backward = score_pass(&reversed(user), target, config);
    backward.score *= config.reverse_penalty;

    let used_reversed = backward.score > forward.score;
    let best = forward.score.max(backward.score);
    let score = if best.is_finite() { best.clamp(0.0, 1.0) } else { 0.0 };

    debug!(
        score,
        forward = forward.score,
        reversed = backward.score,
        gate = ?if used_reversed { backward.gate } else { forward.gate },
        "stroke evaluated"
    );

    Ok(ScoreBreakdown {
        forward,
        reversed: backward,
        used_reversed,
        score,
    })
}

fn check_finite(points: &[Point2d], role: StrokeRole) -> Result<(), StrokeError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(StrokeError::NonFinitePoint { role, index }),
        None => Ok(()),
    }
}

/// One orientation of the pipeline: canonicalize, align, measure, blend.
fn score_pass(user: &[Point2d], target: &[Point2d], config: &ScoringConfig) -> PassScore {
    let n = config.resample_count;
    let user_norm = normalize_to_unit_box(&resample_by_arc_length(user, n));
    let target_norm = normalize_to_unit_box(&resample_by_arc_length(target, n));

    let user_len = path_length(&user_norm);
    let target_len = path_length(&target_norm);
    if user_len < config.degenerate_length || target_len < config.degenerate_length {
        return PassScore::gated(Gate::Degenerate, None);
    }

    let target_centered = center_on_centroid(&target_norm);
    let user_centered = center_on_centroid(&user_norm);
    let angle = best_fit_rotation(&user_centered, &target_centered);
    let user_aligned = rotate_points(&user_centered, angle);

    let scores = MetricScores {
        dtw: metrics::dtw_score(&user_aligned, &target_centered, config.dtw_window_fraction),
        hausdorff: metrics::hausdorff_score(&user_aligned, &target_centered),
        mse: metrics::mse_score(&user_aligned, &target_centered),
        curvature: metrics::curvature_score(
            &user_aligned,
            &target_centered,
            config.signature_length,
            config.curvature_std_floor,
        ),
        endpoint: metrics::endpoint_score(&user_aligned, &target_centered),
        length_ratio: metrics::length_ratio_score(&user_norm, &target_norm),
    };

    if scores.hausdorff < config.hausdorff_gate {
        return PassScore::gated(Gate::Hausdorff, Some(scores));
    }
    if scores.curvature < config.curvature_gate {
        return PassScore::gated(Gate::Curvature, Some(scores));
    }

    // A stroke that ends where it began has no direction to disagree with.
    let cosine = metrics::direction_cosine(&user_norm, &target_norm, config.degenerate_length)
        .unwrap_or(1.0);
    let direction_factor = config.direction_base + config.direction_gain * cosine.clamp(0.0, 1.0);

    PassScore {
        metrics: Some(scores),
        gate: None,
        direction_factor,
        score: scores.weighted(&config.weights) * direction_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::points_from_pairs;

    fn zigzag() -> Vec<Point2d> {
        points_from_pairs(&[[0.0, 0.0], [20.0, 40.0], [40.0, 0.0], [60.0, 40.0]])
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((MetricWeights::default().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ScoringConfig {
            resample_count: 1,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            try_evaluate_accuracy(&zigzag(), &zigzag(), &config),
            Err(StrokeError::InvalidConfig { .. })
        ));
        // The infallible entry point downgrades to 0.
        assert_eq!(evaluate_accuracy_with(&zigzag(), &zigzag(), &config), 0.0);
    }

    #[test]
    fn test_non_finite_point_is_an_error() {
        let mut user = zigzag();
        user[2].y = f64::NAN;
        let err = try_evaluate_accuracy(&user, &zigzag(), &ScoringConfig::default()).unwrap_err();
        assert_eq!(
            err,
            StrokeError::NonFinitePoint {
                role: StrokeRole::User,
                index: 2
            }
        );
        assert_eq!(evaluate_accuracy(&user, &zigzag()), 0.0);
    }

    #[test]
    fn test_breakdown_of_identical_strokes() {
        let b = score_breakdown(&zigzag(), &zigzag(), &ScoringConfig::default()).unwrap();
        assert!(!b.used_reversed);
        assert!(b.forward.gate.is_none());
        let m = b.forward.metrics.unwrap();
        assert!(m.hausdorff > 0.999);
        assert!(m.curvature > 0.999);
        assert!((b.forward.direction_factor - 1.0).abs() < 1e-12);
        assert!(b.score > 0.95);
    }

    #[test]
    fn test_reversed_pass_wins_for_backwards_stroke() {
        let backwards = reversed(&zigzag());
        let b = score_breakdown(&backwards, &zigzag(), &ScoringConfig::default()).unwrap();
        assert!(b.used_reversed);
        assert!(b.score <= 0.9 + 1e-9);
        assert!(b.score > 0.85);
    }

    #[test]
    fn test_degenerate_pass_is_gated() {
        let dot = points_from_pairs(&[[5.0, 5.0], [5.0, 5.0], [5.0, 5.0]]);
        let b = score_breakdown(&dot, &zigzag(), &ScoringConfig::default()).unwrap();
        assert_eq!(b.forward.gate, Some(Gate::Degenerate));
        assert_eq!(b.score, 0.0);
    }

    #[test]
    fn test_comparator_trait_uses_its_config() {
        let strict = DefaultComparator::new(ScoringConfig {
            reverse_penalty: 0.0,
            ..ScoringConfig::default()
        });
        let backwards = reversed(&zigzag());
        let lenient = DefaultComparator::default();
        assert!(strict.evaluate(&backwards, &zigzag()) < lenient.evaluate(&backwards, &zigzag()));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{ "reverse_penalty": 0.8, "weights": { "dtw": 0.5 } }"#).unwrap();
        assert_eq!(config.reverse_penalty, 0.8);
        assert_eq!(config.resample_count, 96);
        assert_eq!(config.weights.dtw, 0.5);
        assert_eq!(config.weights.hausdorff, 0.25);
    }
}
