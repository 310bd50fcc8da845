//! Frame planning: which part of a gesture is visible at each step, and how
//! long to hold it.

use std::time::Duration;

use gesture_types::Gesture;
use serde::{Deserialize, Serialize};
use stroke_kernel::outline::{get_outline, OutlineOptions};
use stroke_kernel::Point2d;

/// One rendered step of a gesture replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationFrame {
    /// 1-based step number.
    pub step: usize,
    pub total_steps: usize,
    /// Eased progress in [0, 1].
    pub progress: f64,
    /// Last reference point fully included in this frame.
    pub point_index: usize,
    /// Outline polygon of the visible part, or its centerline when
    /// outlining is turned off.
    pub partial_points: Vec<Point2d>,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimateOptions {
    /// Upper bound on frames per gesture. Zero is treated as one.
    pub max_steps: usize,
    /// Expand each partial centerline into a brush outline.
    pub outline: bool,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            max_steps: 50,
            outline: true,
        }
    }
}

impl AnimateOptions {
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps,
            ..Self::default()
        }
    }

    /// Frames for a gesture of `point_count` points: two per point, capped.
    pub fn steps_for(&self, point_count: usize) -> usize {
        point_count.saturating_mul(2).min(self.max_steps.max(1))
    }
}

/// A frame and the pause that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFrame {
    pub frame: AnimationFrame,
    pub delay_after: Duration,
}

/// Split eased progress into a whole point index and the fraction toward
/// the next point.
pub fn fractional_index(point_count: usize, eased_progress: f64) -> (usize, f64) {
    if point_count == 0 {
        return (0, 0.0);
    }
    let last = point_count - 1;
    let f = eased_progress.clamp(0.0, 1.0) * last as f64;
    let idx = (f.floor() as usize).min(last);
    (idx, f - idx as f64)
}

/// The reference points reached at `eased_progress`, plus one point
/// interpolated toward the next reference point.
pub fn partial_centerline(points: &[Point2d], eased_progress: f64) -> Vec<Point2d> {
    if points.is_empty() {
        return Vec::new();
    }
    let (idx, frac) = fractional_index(points.len(), eased_progress);
    let mut partial = points[..=idx].to_vec();
    if frac > 0.0 && idx + 1 < points.len() {
        partial.push(points[idx].lerp(&points[idx + 1], frac));
    }
    partial
}

/// Lazily computed frames of one gesture, in step order.
///
/// Holding a plan costs nothing; each frame (and its outline) is built when
/// the iterator reaches it.
#[derive(Debug, Clone)]
pub struct FramePlan<'a> {
    gesture: &'a Gesture,
    outline: Option<OutlineOptions>,
    total_steps: usize,
    next_step: usize,
    delay: Duration,
}

impl<'a> FramePlan<'a> {
    pub fn new(gesture: &'a Gesture, options: &AnimateOptions) -> Self {
        let total_steps = if gesture.points.is_empty() {
            0
        } else {
            options.steps_for(gesture.points.len())
        };
        let delay = match u32::try_from(total_steps) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => gesture.playback_duration() / n,
        };
        Self {
            gesture,
            outline: options
                .outline
                .then(|| OutlineOptions::for_brush(gesture.width)),
            total_steps,
            next_step: 1,
            delay,
        }
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Pause between consecutive frames.
    pub fn frame_delay(&self) -> Duration {
        self.delay
    }

    fn frame_at(&self, step: usize) -> AnimationFrame {
        let linear = step as f64 / self.total_steps as f64;
        let progress = self.gesture.easing.apply(linear);
        let points = &self.gesture.points;
        let centerline = partial_centerline(points, progress);
        let partial_points = match &self.outline {
            Some(opts) => get_outline(&centerline, opts),
            None => centerline,
        };
        AnimationFrame {
            step,
            total_steps: self.total_steps,
            progress,
            point_index: fractional_index(points.len(), progress).0,
            partial_points,
            is_complete: step == self.total_steps,
        }
    }
}

impl Iterator for FramePlan<'_> {
    type Item = PlannedFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_step > self.total_steps {
            return None;
        }
        let frame = self.frame_at(self.next_step);
        self.next_step += 1;
        Some(PlannedFrame {
            frame,
            delay_after: self.delay,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_steps + 1).saturating_sub(self.next_step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FramePlan<'_> {}
