use std::time::Duration;

use serde::{Deserialize, Serialize};
use stroke_kernel::{Easing, Point2d};

/// One authored reference stroke plus how to draw and replay it.
///
/// Brush attributes are stored as recorded. A non-positive width or an
/// empty color is a data problem for whoever authored the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gesture {
    /// Position of this stroke within its character (stroke order).
    pub index: u32,
    /// Centerline as `[x, y]` pairs.
    pub points: Vec<Point2d>,
    /// Brush diameter.
    pub width: f64,
    /// CSS color string, e.g. `#1a1a1a`.
    pub color: String,
    /// Replay duration in milliseconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub easing: Easing,
}

impl Gesture {
    pub const DEFAULT_WIDTH: f64 = 8.0;
    pub const DEFAULT_COLOR: &'static str = "#000000";

    pub fn new(index: u32, points: Vec<Point2d>) -> Self {
        Self {
            index,
            points,
            width: Self::DEFAULT_WIDTH,
            color: Self::DEFAULT_COLOR.to_string(),
            duration: 0,
            easing: Easing::default(),
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_duration_ms(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn playback_duration(&self) -> Duration {
        Duration::from_millis(self.duration)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_round_trip() {
        let g = Gesture::new(2, vec![Point2d::new(1.0, 2.0), Point2d::new(3.0, 4.0)])
            .with_width(6.5)
            .with_color("#ff0000")
            .with_duration_ms(1200)
            .with_easing(Easing::EaseOut);
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["points"], serde_json::json!([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(json["easing"], "ease-out");
        assert_eq!(json["duration"], 1200);
        let back: Gesture = serde_json::from_value(json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_defaults_when_missing() {
        let g: Gesture = serde_json::from_str(
            r##"{ "index": 0, "points": [[0, 0], [10, 0]], "width": 4, "color": "#111" }"##,
        )
        .unwrap();
        assert_eq!(g.easing, Easing::Ease);
        assert_eq!(g.duration, 0);
        assert_eq!(g.playback_duration(), Duration::ZERO);
    }

    #[test]
    fn test_unknown_easing_is_rejected() {
        let res: Result<Gesture, _> = serde_json::from_str(
            r##"{ "index": 0, "points": [], "width": 4, "color": "#111", "easing": "bounce" }"##,
        );
        assert!(res.is_err());
    }
}
