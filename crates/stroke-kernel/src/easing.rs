//! Easing curves for replaying strokes.
//!
//! Every curve maps linear progress in [0, 1] onto eased progress in [0, 1],
//! fixes both endpoints and never decreases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of easing curves a gesture can be replayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Easing {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "ease-in")]
    EaseIn,
    #[serde(rename = "ease-out")]
    EaseOut,
    #[serde(rename = "ease-in-out")]
    EaseInOut,
    #[default]
    #[serde(rename = "ease")]
    Ease,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing function '{0}'")]
pub struct ParseEasingError(pub String);

impl Easing {
    pub const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Ease,
    ];

    /// Remap linear progress `t` onto eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Ease => CubicBezier::CSS_EASE.solve(t),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Ease => "ease",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

/// A cubic Bézier timing curve through (0,0) and (1,1), as CSS defines it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// CSS `ease`.
    pub const CSS_EASE: Self = Self {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    };

    const NEWTON_ITERATIONS: usize = 8;
    const EPSILON: f64 = 1e-7;

    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // Polynomial coefficients of one axis: a*t^3 + b*t^2 + c*t.
    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample_x(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        ((a * t + b) * t + c) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.y1, self.y2);
        ((a * t + b) * t + c) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Curve parameter whose x coordinate equals `x`.
    fn solve_t_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Newton stalled; bisect.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let sx = self.sample_x(t);
            if (sx - x).abs() < Self::EPSILON {
                return t;
            }
            if x > sx {
                lo = t;
            } else {
                hi = t;
            }
            let next = (lo + hi) * 0.5;
            if (next - t).abs() < f64::EPSILON {
                break;
            }
            t = next;
        }
        t
    }

    /// Eased value for progress `x`.
    pub fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t_for_x(x)).clamp(0.0, 1.0)
    }
}
