//! Brush outlines: turn a thin centerline into a closed, variable-width
//! polygon that looks like a pressure-sensitive pen stroke.
//!
//! The outline of an outline is not a better outline. Callers expand a given
//! centerline exactly once; feeding the polygon back in double-smooths it.

mod freehand;
mod path;

pub use freehand::{outline_points, stroke_points, StrokePoint};
pub use path::{path_commands, to_path, PathCommand};

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::geometry::Point2d;

/// How far a stroke end narrows to a point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taper {
    #[default]
    None,
    /// Taper over the whole stroke.
    Full,
    /// Taper over this many units of path length.
    Length(f64),
}

impl Taper {
    pub(crate) fn distance(self, size: f64, total_length: f64) -> f64 {
        match self {
            Taper::None => 0.0,
            Taper::Full => size.max(total_length),
            Taper::Length(d) => d.max(0.0),
        }
    }
}

/// Treatment of one end of the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaperOptions {
    pub taper: Taper,
    /// Round cap when true, flat when false. Ignored when tapered.
    pub cap: bool,
}

impl Default for TaperOptions {
    fn default() -> Self {
        Self {
            taper: Taper::None,
            cap: true,
        }
    }
}

/// Parameters of the outline algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineOptions {
    /// Base diameter of the brush.
    pub size: f64,
    /// How much pressure narrows the brush, in [-1, 1].
    pub thinning: f64,
    /// Softness of the outline edges, in [0, 1].
    pub smoothing: f64,
    /// How strongly the centerline is low-pass filtered, in [0, 1].
    pub streamline: f64,
    /// Derive pressure from drawing speed instead of using recorded values.
    pub simulate_pressure: bool,
    /// Curve applied to pressure before it sets the radius.
    pub easing: Easing,
    pub start: TaperOptions,
    pub end: TaperOptions,
    /// The centerline is complete; its last point is used as-is.
    pub last: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            size: 16.0,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            simulate_pressure: true,
            easing: Easing::Linear,
            start: TaperOptions::default(),
            end: TaperOptions::default(),
            last: false,
        }
    }
}

impl OutlineOptions {
    /// Options for replaying a recorded gesture drawn with `width`.
    pub fn for_brush(width: f64) -> Self {
        Self {
            size: width,
            last: true,
            ..Self::default()
        }
    }
}

/// Expand `centerline` into a closed outline polygon.
///
/// Empty input, or a non-positive brush size, gives an empty outline.
pub fn get_outline(centerline: &[Point2d], options: &OutlineOptions) -> Vec<Point2d> {
    outline_points(&stroke_points(centerline, options), options)
}
