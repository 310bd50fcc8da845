use std::f64::consts::PI;

use super::OutlineOptions;
use crate::geometry::{Point2d, Vec2};

// Slightly more than a half turn, so cap arcs overlap instead of leaving a seam.
const FIXED_PI: f64 = PI + 0.0001;
const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;
const FIRST_PRESSURE: f64 = 0.25;
const DEFAULT_PRESSURE: f64 = 0.5;
// Points this close to the end are folded into the end cap.
const END_NOISE: f64 = 3.0;
const CORNER_ARC_STEPS: usize = 13;
const START_CAP_STEPS: usize = 13;
const END_CAP_STEPS: usize = 29;

/// A centerline point after streamlining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub point: Point2d,
    pub pressure: f64,
    /// Unit vector pointing back toward the previous point.
    pub vector: Vec2,
    /// Distance from the previous point.
    pub distance: f64,
    /// Path length up to and including this point.
    pub running_length: f64,
}

/// Streamline a raw centerline and annotate it for outlining.
///
/// Each input point pulls the running point toward itself by a factor set
/// by `streamline`. Points are dropped until the path is `size` long, so a
/// short pen wobble at the start does not set the stroke direction.
pub fn stroke_points(points: &[Point2d], options: &OutlineOptions) -> Vec<StrokePoint> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let t = 0.15 + (1.0 - options.streamline) * 0.85;

    // Two points give too little to streamline; interpolate three more.
    // A lone point gets a neighbour so it has a direction.
    let input: Vec<Point2d> = match points {
        [a, b] => std::iter::once(*a)
            .chain((1..5).map(|i| a.lerp(b, i as f64 / 4.0)))
            .collect(),
        [a] => vec![*a, Point2d::new(a.x + 1.0, a.y + 1.0)],
        _ => points.to_vec(),
    };

    let mut out = vec![StrokePoint {
        point: first,
        pressure: FIRST_PRESSURE,
        vector: Vec2::new(1.0, 1.0),
        distance: 0.0,
        running_length: 0.0,
    }];

    let max = input.len() - 1;
    let mut prev = out[0];
    let mut running_length = 0.0;
    let mut reached_min_length = false;

    for (i, raw) in input.iter().enumerate().skip(1) {
        let point = if options.last && i == max {
            *raw
        } else {
            prev.point.lerp(raw, t)
        };
        if point == prev.point {
            continue;
        }

        let distance = point.distance_to(&prev.point);
        running_length += distance;

        if i < max && !reached_min_length {
            if running_length < options.size {
                continue;
            }
            reached_min_length = true;
        }

        prev = StrokePoint {
            point,
            pressure: DEFAULT_PRESSURE,
            vector: (prev.point - point).normalize_or_zero(),
            distance,
            running_length,
        };
        out.push(prev);
    }

    out[0].vector = out.get(1).map_or(Vec2::ZERO, |p| p.vector);
    out
}

/// Brush radius for a given pressure.
fn stroke_radius(options: &OutlineOptions, pressure: f64) -> f64 {
    options.size * options.easing.apply(0.5 - options.thinning * (0.5 - pressure))
}

/// Pressure drifts toward `1 - speed`, so slow drawing widens the brush.
fn simulated_pressure(previous: f64, distance: f64, size: f64) -> f64 {
    let speed = (distance / size).min(1.0);
    let target = 1.0 - speed;
    (previous + (target - previous) * (speed * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

fn rotate_around(p: Point2d, center: Point2d, angle: f64) -> Point2d {
    center + (p - center).rotate(angle)
}

/// Offset the streamlined centerline into a closed outline polygon.
///
/// Returns the left edge, the end cap, the right edge walked backwards and
/// the start cap, in that order.
pub fn outline_points(points: &[StrokePoint], options: &OutlineOptions) -> Vec<Point2d> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let size = options.size;
    if !(size > 0.0) {
        return Vec::new();
    }

    let total_length = last.running_length;
    let taper_start = options.start.taper.distance(size, total_length);
    let taper_end = options.end.taper.distance(size, total_length);
    let min_distance = (size * options.smoothing).powi(2);

    let mut left: Vec<Point2d> = Vec::new();
    let mut right: Vec<Point2d> = Vec::new();

    // Seed the pressure from the opening stretch of the stroke.
    let mut prev_pressure = points.iter().take(10).fold(first.pressure, |acc, sp| {
        let pressure = if options.simulate_pressure {
            simulated_pressure(acc, sp.distance, size)
        } else {
            sp.pressure
        };
        (acc + pressure) / 2.0
    });

    let mut radius = stroke_radius(options, last.pressure);
    let mut first_radius: Option<f64> = None;
    let mut prev_vector = first.vector;
    let mut pl = first.point;
    let mut pr = first.point;
    let mut tl = pl;
    let mut tr = pr;
    let mut prev_was_sharp = false;

    for (i, sp) in points.iter().enumerate() {
        let is_last = i == points.len() - 1;
        if !is_last && total_length - sp.running_length < END_NOISE {
            continue;
        }

        let mut pressure = sp.pressure;
        if options.thinning != 0.0 {
            if options.simulate_pressure {
                pressure = simulated_pressure(prev_pressure, sp.distance, size);
            }
            radius = stroke_radius(options, pressure);
        } else {
            radius = size / 2.0;
        }
        first_radius.get_or_insert(radius);

        let ts = if sp.running_length < taper_start {
            taper_start_ease(sp.running_length / taper_start)
        } else {
            1.0
        };
        let remaining = total_length - sp.running_length;
        let te = if remaining < taper_end {
            taper_end_ease(remaining / taper_end)
        } else {
            1.0
        };
        radius = (radius * ts.min(te)).max(0.01);

        let next_vector = if is_last { sp.vector } else { points[i + 1].vector };
        let next_dpr = if is_last { 1.0 } else { sp.vector.dot(&next_vector) };
        let prev_dpr = sp.vector.dot(&prev_vector);

        let is_sharp = prev_dpr < 0.0 && !prev_was_sharp;
        let next_is_sharp = next_dpr < 0.0;

        if is_sharp || next_is_sharp {
            // Swing a half circle around the corner point.
            let offset = prev_vector.perp() * radius;
            for k in 0..=CORNER_ARC_STEPS {
                let t = k as f64 / CORNER_ARC_STEPS as f64;
                tl = rotate_around(sp.point - offset, sp.point, FIXED_PI * t);
                left.push(tl);
                tr = rotate_around(sp.point + offset, sp.point, -FIXED_PI * t);
                right.push(tr);
            }
            pl = tl;
            pr = tr;
            if next_is_sharp {
                prev_was_sharp = true;
            }
            continue;
        }
        prev_was_sharp = false;

        if is_last {
            let offset = sp.vector.perp() * radius;
            left.push(sp.point - offset);
            right.push(sp.point + offset);
            continue;
        }

        let offset = next_vector.lerp(&sp.vector, next_dpr).perp() * radius;
        tl = sp.point - offset;
        if i <= 1 || pl.distance_squared_to(&tl) > min_distance {
            left.push(tl);
            pl = tl;
        }
        tr = sp.point + offset;
        if i <= 1 || pr.distance_squared_to(&tr) > min_distance {
            right.push(tr);
            pr = tr;
        }

        prev_pressure = pressure;
        prev_vector = sp.vector;
    }

    let first_point = first.point;
    let last_point = if points.len() > 1 {
        last.point
    } else {
        Point2d::new(first.point.x + 1.0, first.point.y + 1.0)
    };

    if points.len() == 1 {
        if (taper_start == 0.0 && taper_end == 0.0) || options.last {
            let r = first_radius.unwrap_or(radius);
            let start = first_point + (first_point - last_point).perp().normalize_or_zero() * -r;
            return (1..=START_CAP_STEPS)
                .map(|k| {
                    let t = k as f64 / START_CAP_STEPS as f64;
                    rotate_around(start, first_point, FIXED_PI * 2.0 * t)
                })
                .collect();
        }
        left.extend(right.into_iter().rev());
        return left;
    }

    let mut start_cap: Vec<Point2d> = Vec::new();
    if taper_start == 0.0 {
        if let (Some(&l0), Some(&r0)) = (left.first(), right.first()) {
            if options.start.cap {
                start_cap.extend((1..=START_CAP_STEPS).map(|k| {
                    let t = k as f64 / START_CAP_STEPS as f64;
                    rotate_around(r0, first_point, FIXED_PI * t)
                }));
            } else {
                let corners = l0 - r0;
                let a = corners * 0.5;
                let b = corners * 0.51;
                start_cap.extend([
                    first_point - a,
                    first_point - b,
                    first_point + b,
                    first_point + a,
                ]);
            }
        }
    }

    let mut end_cap: Vec<Point2d> = Vec::new();
    let direction = (-last.vector).perp();
    if taper_end > 0.0 {
        end_cap.push(last_point);
    } else if options.end.cap {
        let start = last_point + direction * radius;
        end_cap.extend((1..END_CAP_STEPS).map(|k| {
            let t = k as f64 / END_CAP_STEPS as f64;
            rotate_around(start, last_point, FIXED_PI * 3.0 * t)
        }));
    } else {
        end_cap.extend([
            last_point + direction * radius,
            last_point + direction * (radius * 0.99),
            last_point - direction * (radius * 0.99),
            last_point - direction * radius,
        ]);
    }

    let mut outline = left;
    outline.extend(end_cap);
    outline.extend(right.into_iter().rev());
    outline.extend(start_cap);
    outline
}

fn taper_start_ease(t: f64) -> f64 {
    t * (2.0 - t)
}

fn taper_end_ease(t: f64) -> f64 {
    (t - 1.0).powi(3) + 1.0
}
