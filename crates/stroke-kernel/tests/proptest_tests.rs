//! Property-based tests for stroke comparison invariants using `proptest`.

use proptest::prelude::*;

use stroke_kernel::geometry::polyline::{path_length, reversed, scaled, translated};
use stroke_kernel::resample::{normalize_to_unit_box, resample_by_arc_length};
use stroke_kernel::{evaluate_accuracy, Easing, Point2d};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary stroke of a handful of points in a drawing-canvas range.
fn arb_stroke() -> impl Strategy<Value = Vec<Point2d>> {
    prop::collection::vec((-200.0f64..200.0, -200.0f64..200.0), 3..12)
        .prop_map(|pairs| pairs.into_iter().map(Point2d::from).collect())
        .prop_filter("stroke must have visible extent", |pts: &Vec<Point2d>| {
            path_length(pts) > 1.0
        })
}

/// Arbitrary translation offsets.
fn arb_translation() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0)
}

/// Arbitrary positive uniform scale.
fn arb_scale() -> impl Strategy<Value = f64> {
    0.1f64..10.0
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// 1. Determinism: identical inputs give bit-identical scores
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn score_is_deterministic(a in arb_stroke(), b in arb_stroke()) {
        let first = evaluate_accuracy(&a, &b);
        let second = evaluate_accuracy(&a, &b);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}

// ---------------------------------------------------------------------------
// 2. Range: every score lies in [0, 1]
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn score_in_unit_range(a in arb_stroke(), b in arb_stroke()) {
        let s = evaluate_accuracy(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
    }
}

// ---------------------------------------------------------------------------
// 3. Self-similarity: a stroke matches itself almost perfectly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn self_similarity_near_one(a in arb_stroke()) {
        let s = evaluate_accuracy(&a, &a);
        prop_assert!(s >= 0.95, "self score {}", s);
    }
}

// ---------------------------------------------------------------------------
// 4. Translation invariance
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn translation_invariance(
        a in arb_stroke(),
        b in arb_stroke(),
        (dx, dy) in arb_translation(),
    ) {
        let base = evaluate_accuracy(&a, &b);
        let moved = evaluate_accuracy(&translated(&a, dx, dy), &b);
        prop_assert!((base - moved).abs() < TOL, "base={} moved={}", base, moved);
    }
}

// ---------------------------------------------------------------------------
// 5. Uniform-scale invariance
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn scale_invariance(a in arb_stroke(), b in arb_stroke(), k in arb_scale()) {
        let base = evaluate_accuracy(&a, &b);
        let resized = evaluate_accuracy(&scaled(&a, k), &b);
        prop_assert!((base - resized).abs() < TOL, "base={} scaled={}", base, resized);
    }
}

// ---------------------------------------------------------------------------
// 6. Reverse tolerance: a reversed copy scores close to, not above, itself
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn reverse_tolerance(a in arb_stroke()) {
        let same = evaluate_accuracy(&a, &a);
        let back = evaluate_accuracy(&reversed(&a), &a);
        prop_assert!(back >= 0.8 * same, "reversed={} same={}", back, same);
        prop_assert!(back <= same + TOL, "reversed={} same={}", back, same);
    }
}

// ---------------------------------------------------------------------------
// 7. Resampling keeps endpoints and normalization fits the unit box
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn resample_keeps_endpoints(a in arb_stroke(), n in 2usize..200) {
        let r = resample_by_arc_length(&a, n);
        prop_assert_eq!(r.len(), n);
        let (first, last) = (a[0], a[a.len() - 1]);
        prop_assert!(r[0].distance_to(&first) < TOL);
        prop_assert!(r[n - 1].distance_to(&last) < TOL);
    }
}

proptest! {
    #[test]
    fn normalized_stroke_fits_unit_box(a in arb_stroke()) {
        let norm = normalize_to_unit_box(&a);
        for p in &norm {
            prop_assert!(p.x >= -TOL && p.x <= 1.0 + TOL);
            prop_assert!(p.y >= -TOL && p.y <= 1.0 + TOL);
        }
    }
}

// ---------------------------------------------------------------------------
// 8. Easing curves stay monotonic inside [0, 1]
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn easing_monotonic(t0 in 0.0f64..1.0, dt in 0.0f64..1.0) {
        let t1 = (t0 + dt).min(1.0);
        for e in Easing::ALL {
            let (v0, v1) = (e.apply(t0), e.apply(t1));
            prop_assert!((0.0..=1.0).contains(&v0));
            prop_assert!(v1 + 1e-9 >= v0, "{} decreased: {} -> {}", e, v0, v1);
        }
    }
}
