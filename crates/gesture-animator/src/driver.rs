use gesture_types::{Gesture, GestureSet};
use tracing::{debug, instrument};

use crate::frames::{AnimateOptions, AnimationFrame, FramePlan};

/// Replay `gesture`, handing each frame to `on_frame`.
///
/// The first frame is emitted immediately; every frame is followed by an
/// even share of the gesture's duration, so the returned future resolves
/// once the whole duration has elapsed. A gesture without points resolves
/// at once and emits nothing.
///
/// Dropping the future stops the replay and cancels its pending timer.
#[instrument(skip_all, fields(index = gesture.index, points = gesture.points.len()))]
pub async fn animate<F>(gesture: &Gesture, mut on_frame: F, options: &AnimateOptions)
where
    F: FnMut(AnimationFrame),
{
    let plan = FramePlan::new(gesture, options);
    if plan.len() == 0 {
        debug!("gesture has no points, nothing to animate");
        return;
    }
    debug!(
        steps = plan.total_steps(),
        delay_ms = plan.frame_delay().as_millis() as u64,
        "animating gesture"
    );

    for planned in plan {
        debug!(
            step = planned.frame.step,
            progress = planned.frame.progress,
            point_index = planned.frame.point_index,
            "frame"
        );
        on_frame(planned.frame);
        if !planned.delay_after.is_zero() {
            tokio::time::sleep(planned.delay_after).await;
        }
    }
}

/// Replay every gesture of a set in stroke order.
///
/// `on_frame` receives the gesture's index with each frame.
#[instrument(skip_all, fields(gestures = set.len()))]
pub async fn animate_set<F>(set: &GestureSet, mut on_frame: F, options: &AnimateOptions)
where
    F: FnMut(u32, AnimationFrame),
{
    for gesture in set {
        let index = gesture.index;
        animate(gesture, |frame| on_frame(index, frame), options).await;
    }
    debug!("gesture set complete");
}
