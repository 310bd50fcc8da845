//! Timed replay of recorded gestures as a sequence of partial-stroke frames.
//!
//! [`FramePlan`] is the pure, lazy part: an iterator of frames with the pause
//! after each. [`animate`] walks a plan on the tokio timer.

pub mod driver;
pub mod frames;

pub use driver::{animate, animate_set};
pub use frames::{
    fractional_index, partial_centerline, AnimateOptions, AnimationFrame, FramePlan,
    PlannedFrame,
};
