//! Render gesture replays as SVG contact sheets and print a scoring report.
//!
//! Usage: `render_frames [gestures.json]`. Without an argument a built-in
//! three-stroke character is used.

use std::error::Error;
use std::fs;

use gesture_animator::{AnimateOptions, FramePlan};
use gesture_types::{Gesture, GestureSet};
use stroke_kernel::geometry::polyline::reversed;
use stroke_kernel::outline::{get_outline, to_path, OutlineOptions};
use stroke_kernel::{
    points_from_pairs, score_breakdown, BoundingBox2d, Easing, Point2d, ScoringConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CELL: f64 = 160.0;
const COLUMNS: usize = 6;

/// A character drawn in three strokes: a bar, a drop and a sweep.
fn demo_set() -> GestureSet {
    let bar = Gesture::new(0, points_from_pairs(&[[20.0, 60.0], [60.0, 58.0], [100.0, 56.0], [140.0, 58.0]]))
        .with_width(9.0)
        .with_color("#1f2933")
        .with_duration_ms(600)
        .with_easing(Easing::EaseOut);
    let drop = Gesture::new(
        1,
        points_from_pairs(&[[80.0, 15.0], [81.0, 45.0], [80.0, 75.0], [78.0, 105.0], [76.0, 140.0]]),
    )
    .with_width(9.0)
    .with_color("#1f2933")
    .with_duration_ms(700);
    let sweep = Gesture::new(
        2,
        points_from_pairs(&[
            [78.0, 70.0],
            [65.0, 95.0],
            [48.0, 118.0],
            [28.0, 136.0],
            [12.0, 145.0],
        ]),
    )
    .with_width(8.0)
    .with_color("#9b1c1c")
    .with_duration_ms(650)
    .with_easing(Easing::EaseInOut);

    // Indices are unique by construction.
    GestureSet::from_unordered(vec![sweep, bar, drop]).unwrap_or_default()
}

/// Fit the whole character into one cell.
struct Viewport {
    min: Point2d,
    scale: f64,
}

impl Viewport {
    fn fit(set: &GestureSet) -> Self {
        let mut bb = BoundingBox2d::empty();
        for g in set {
            for p in &g.points {
                bb.expand_to_include(p);
            }
        }
        let padding = 16.0;
        let extent = bb.max_extent().max(1.0);
        Self {
            min: Point2d::new(bb.min.x - padding, bb.min.y - padding),
            scale: CELL / (extent + 2.0 * padding),
        }
    }

    /// Map character coordinates into cell-local coordinates.
    fn place(&self, points: &[Point2d]) -> Vec<Point2d> {
        points
            .iter()
            .map(|p| Point2d::new((p.x - self.min.x) * self.scale, (p.y - self.min.y) * self.scale))
            .collect()
    }
}

fn path_element(points: &[Point2d], fill: &str, opacity: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    format!(
        "<path d=\"{}\" fill=\"{fill}\" fill-opacity=\"{opacity:.2}\"/>\n",
        to_path(points)
    )
}

/// One cell per frame; earlier strokes stay on screen, fully drawn.
fn contact_sheet(set: &GestureSet, options: &AnimateOptions) -> (String, usize) {
    let view = Viewport::fit(set);
    let mut body = String::new();
    let mut cell = 0;

    for (pos, gesture) in set.iter().enumerate() {
        let finished: Vec<(Vec<Point2d>, &str)> = set.gestures()[..pos]
            .iter()
            .map(|g| {
                let scaled = view.place(&g.points);
                let outline = get_outline(&scaled, &OutlineOptions::for_brush(g.width * view.scale));
                (outline, g.color.as_str())
            })
            .collect();

        // Plan on placed points so the brush width matches the cell scale.
        let placed = Gesture {
            points: view.place(&gesture.points),
            width: gesture.width * view.scale,
            ..gesture.clone()
        };
        for planned in FramePlan::new(&placed, options) {
            let frame = planned.frame;
            let ox = (cell % COLUMNS) as f64 * CELL;
            let oy = (cell / COLUMNS) as f64 * CELL;
            body.push_str(&format!(
                "<g transform=\"translate({ox},{oy})\">\n\
                 <rect width=\"{CELL}\" height=\"{CELL}\" fill=\"#fdfcf8\" stroke=\"#ddd\"/>\n"
            ));
            for (outline, color) in &finished {
                body.push_str(&path_element(outline, color, 0.85));
            }
            body.push_str(&path_element(&frame.partial_points, &gesture.color, 1.0));
            body.push_str(&format!(
                "<text x=\"6\" y=\"14\" font-family=\"monospace\" font-size=\"10\" fill=\"#888\">\
                 #{} {}/{} t={:.2}</text>\n</g>\n",
                gesture.index, frame.step, frame.total_steps, frame.progress
            ));
            cell += 1;
        }
    }

    let rows = cell.div_ceil(COLUMNS).max(1);
    let width = CELL * COLUMNS as f64;
    let height = CELL * rows as f64;
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n{body}</svg>\n"
    );
    (svg, cell)
}

/// Candidate strokes to score against each reference.
fn candidates(target: &[Point2d]) -> Vec<(&'static str, Vec<Point2d>)> {
    let shaky: Vec<Point2d> = target
        .iter()
        .enumerate()
        .map(|(i, p)| Point2d::new(p.x + if i % 2 == 0 { 2.0 } else { -2.0 }, p.y + 1.5))
        .collect();
    let shifted: Vec<Point2d> = target
        .iter()
        .map(|p| Point2d::new(p.x * 0.5 + 200.0, p.y * 0.5 - 40.0))
        .collect();
    let first = target.first().copied().unwrap_or(Point2d::ORIGIN);
    let last = target.last().copied().unwrap_or(Point2d::ORIGIN);
    let mid = first.midpoint(&last);
    let span = first.distance_to(&last);
    let bent = vec![first, Point2d::new(mid.x + span * 0.5, mid.y - span * 0.5), last];
    vec![
        ("exact", target.to_vec()),
        ("shaky", shaky),
        ("small+moved", shifted),
        ("reversed", reversed(target)),
        ("bent", bent),
    ]
}

fn scoring_report(set: &GestureSet, config: &ScoringConfig) -> String {
    let mut report = String::from(
        "| stroke | candidate | score | pass | gate | dtw | hausdorff | mse | curvature |\n\
         |---|---|---|---|---|---|---|---|---|\n",
    );
    for gesture in set {
        for (name, user) in candidates(&gesture.points) {
            let row = match score_breakdown(&user, &gesture.points, config) {
                Ok(b) => {
                    let pass = b.winning_pass();
                    let m = pass.metrics;
                    format!(
                        "| {} | {name} | {:.3} | {} | {} | {} | {} | {} | {} |\n",
                        gesture.index,
                        b.score,
                        if b.used_reversed { "reversed" } else { "forward" },
                        pass.gate.map_or("-".to_string(), |g| format!("{g:?}")),
                        m.map_or("-".to_string(), |m| format!("{:.3}", m.dtw)),
                        m.map_or("-".to_string(), |m| format!("{:.3}", m.hausdorff)),
                        m.map_or("-".to_string(), |m| format!("{:.3}", m.mse)),
                        m.map_or("-".to_string(), |m| format!("{:.3}", m.curvature)),
                    )
                }
                Err(err) => format!("| {} | {name} | error: {err} |||||||\n", gesture.index),
            };
            report.push_str(&row);
        }
    }
    report
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let set = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading gestures");
            GestureSet::from_json(&fs::read_to_string(&path)?)?
        }
        None => demo_set(),
    };

    fs::create_dir_all("docs/renders")?;

    println!("=== Animation Frames ===");
    let options = AnimateOptions::default();
    let (svg, frames) = contact_sheet(&set, &options);
    fs::write("docs/renders/frames.svg", svg)?;
    println!(
        "  {} gestures, {} frames, {} ms total -> docs/renders/frames.svg",
        set.len(),
        frames,
        set.total_duration().as_millis()
    );

    let sparse = AnimateOptions::with_max_steps(6);
    let (svg, frames) = contact_sheet(&set, &sparse);
    fs::write("docs/renders/frames_sparse.svg", svg)?;
    println!("  {frames} frames (max 6 per stroke) -> docs/renders/frames_sparse.svg");

    println!("\n=== Scoring ===");
    let report = scoring_report(&set, &ScoringConfig::default());
    print!("{report}");
    fs::write("docs/renders/scores.md", &report)?;
    fs::write("docs/renders/gestures.json", set.to_json_pretty()?)?;

    Ok(())
}
