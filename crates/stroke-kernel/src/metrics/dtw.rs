use crate::geometry::Point2d;

use super::distance_to_score;

/// Dynamic time warping distance with a Sakoe-Chiba band.
///
/// The band half-width is `window_fraction` of the longer sequence, widened
/// to at least the length difference so the end cell stays reachable.
/// Returns infinity when either sequence is empty.
pub fn dtw_distance(a: &[Point2d], b: &[Point2d], window_fraction: f64) -> f64 {
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return f64::INFINITY;
    }

    let window = ((window_fraction * n.max(m) as f64).ceil() as usize).max(n.abs_diff(m));

    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for i in 1..=n {
        curr.fill(f64::INFINITY);
        let lo = i.saturating_sub(window).max(1);
        let hi = (i + window).min(m);
        for j in lo..=hi {
            let cost = a[i - 1].distance_to(&b[j - 1]);
            let best = prev[j].min(curr[j - 1]).min(prev[j - 1]);
            curr[j] = cost + best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// DTW distance normalized by the combined sequence length, as a score.
pub fn dtw_score(a: &[Point2d], b: &[Point2d], window_fraction: f64) -> f64 {
    let total = (a.len() + b.len()) as f64;
    distance_to_score(dtw_distance(a, b, window_fraction) / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize, y: f64) -> Vec<Point2d> {
        (0..n).map(|i| Point2d::new(i as f64, y)).collect()
    }

    #[test]
    fn test_identical_sequences_have_zero_distance() {
        let a = line(20, 0.0);
        assert_eq!(dtw_distance(&a, &a, 0.15), 0.0);
        assert_eq!(dtw_score(&a, &a, 0.15), 1.0);
    }

    #[test]
    fn test_constant_offset() {
        let a = line(10, 0.0);
        let b = line(10, 0.5);
        // Diagonal path is optimal: ten cells of cost 0.5.
        assert!((dtw_distance(&a, &b, 0.15) - 5.0).abs() < 1e-9);
        assert!((dtw_score(&a, &b, 0.15) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_warping_absorbs_repeated_samples() {
        let a = line(6, 0.0);
        let mut b = line(6, 0.0);
        b.insert(3, b[2]);
        assert!(dtw_distance(&a, &b, 0.15) < 1e-12);
    }

    #[test]
    fn test_unequal_lengths_stay_reachable() {
        let a = line(5, 0.0);
        let b = line(30, 0.0);
        assert!(dtw_distance(&a, &b, 0.0).is_finite());
    }

    #[test]
    fn test_empty_is_infinite() {
        assert!(dtw_distance(&[], &line(3, 0.0), 0.15).is_infinite());
        assert_eq!(dtw_score(&[], &line(3, 0.0), 0.15), 0.0);
    }
}
