//! End-to-end comparator scenarios on hand-drawn style strokes.

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use stroke_kernel::geometry::polyline::reversed;
use stroke_kernel::outline::{get_outline, OutlineOptions};
use stroke_kernel::{
    evaluate_accuracy, evaluate_accuracy_with, points_from_pairs, score_breakdown,
    try_evaluate_accuracy, DefaultComparator, MetricWeights, Point2d, ScoringConfig,
    StrokeComparator,
};

fn horizontal() -> Vec<Point2d> {
    points_from_pairs(&[[0.0, 0.0], [50.0, 0.0], [100.0, 0.0]])
}

fn circle(center: Point2d, radius: f64, segments: usize) -> Vec<Point2d> {
    (0..=segments)
        .map(|i| {
            let a = TAU * i as f64 / segments as f64;
            Point2d::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

fn hook() -> Vec<Point2d> {
    points_from_pairs(&[
        [10.0, 10.0],
        [40.0, 12.0],
        [70.0, 20.0],
        [85.0, 45.0],
        [80.0, 70.0],
        [65.0, 80.0],
    ])
}

#[test]
fn degenerate_inputs_score_zero() {
    let target = horizontal();
    assert_eq!(evaluate_accuracy(&[], &target), 0.0);
    assert_eq!(evaluate_accuracy(&[Point2d::new(0.0, 0.0)], &target), 0.0);
    let still = points_from_pairs(&[[3.0, 3.0], [3.0, 3.0]]);
    assert_eq!(evaluate_accuracy(&still, &target), 0.0);
    assert_eq!(evaluate_accuracy(&target, &still), 0.0);
    // Degenerate geometry is not an error.
    assert_eq!(
        try_evaluate_accuracy(&still, &target, &ScoringConfig::default()).unwrap(),
        0.0
    );
}

#[test]
fn identical_strokes_score_near_one() {
    for stroke in [horizontal(), hook(), circle(Point2d::new(0.0, 0.0), 40.0, 48)] {
        let s = evaluate_accuracy(&stroke, &stroke);
        assert!(s >= 0.95, "self score {s}");
    }
}

#[test]
fn near_parallel_line_passes() {
    let user = points_from_pairs(&[[0.0, 5.0], [50.0, 3.0], [100.0, 1.0]]);
    let s = evaluate_accuracy(&user, &horizontal());
    assert!(s > 0.7, "score {s}");
}

#[test]
fn sharp_v_fails() {
    let user = points_from_pairs(&[[0.0, 0.0], [50.0, 50.0], [100.0, 0.0]]);
    let s = evaluate_accuracy(&user, &horizontal());
    assert!(s < 0.3, "score {s}");

    let b = score_breakdown(&user, &horizontal(), &ScoringConfig::default()).unwrap();
    assert!(b.winning_pass().gate.is_some());
}

#[test]
fn line_versus_loop_fails() {
    let loop_ = circle(Point2d::new(50.0, 0.0), 20.0, 32);
    let s = evaluate_accuracy(&horizontal(), &loop_);
    assert!(s < 0.3, "score {s}");
    let s = evaluate_accuracy(&loop_, &horizontal());
    assert!(s < 0.3, "score {s}");
}

#[test]
fn reversed_stroke_is_penalized_but_accepted() {
    let forward = evaluate_accuracy(&hook(), &hook());
    let backward = evaluate_accuracy(&reversed(&hook()), &hook());
    assert!(backward < forward);
    assert!(backward >= 0.8 * forward);
}

#[test]
fn shaky_copy_beats_different_shape() {
    let shaky: Vec<Point2d> = hook()
        .iter()
        .enumerate()
        .map(|(i, p)| Point2d::new(p.x + if i % 2 == 0 { 1.5 } else { -1.5 }, p.y + 1.0))
        .collect();
    let other = points_from_pairs(&[[10.0, 80.0], [30.0, 50.0], [50.0, 30.0], [80.0, 10.0]]);
    assert!(evaluate_accuracy(&shaky, &hook()) > evaluate_accuracy(&other, &hook()));
}

#[test]
fn default_config_matches_plain_entry_point() {
    let user = points_from_pairs(&[[0.0, 5.0], [50.0, 3.0], [100.0, 1.0]]);
    let plain = evaluate_accuracy(&user, &horizontal());
    let with = evaluate_accuracy_with(&user, &horizontal(), &ScoringConfig::default());
    let via_trait = DefaultComparator::default().evaluate(&user, &horizontal());
    assert_eq!(plain.to_bits(), with.to_bits());
    assert_eq!(plain.to_bits(), via_trait.to_bits());
}

#[test]
fn custom_weights_change_the_blend() {
    let user = hook()
        .into_iter()
        .map(|p| Point2d::new(p.x * 1.3, p.y))
        .collect::<Vec<_>>();
    let dtw_only = ScoringConfig::with_weights(MetricWeights {
        dtw: 1.0,
        hausdorff: 0.0,
        mse: 0.0,
        curvature: 0.0,
        endpoint: 0.0,
        length_ratio: 0.0,
    });
    let b = score_breakdown(&user, &hook(), &dtw_only).unwrap();
    let pass = b.winning_pass();
    let metrics = pass.metrics.unwrap();
    assert_relative_eq!(
        pass.score,
        metrics.dtw * pass.direction_factor * if b.used_reversed { 0.9 } else { 1.0 },
        epsilon = 1e-12
    );
}

#[test]
fn outline_applied_twice_differs_from_once() {
    let centerline = hook();
    let options = OutlineOptions::for_brush(6.0);
    let once = get_outline(&centerline, &options);
    let twice = get_outline(&once, &options);
    assert!(!once.is_empty());
    assert_ne!(once, twice);
}
