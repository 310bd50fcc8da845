//! Recorded gestures as the authoring side persists them.

pub mod error;
pub mod gesture;
pub mod set;

pub use error::GestureError;
pub use gesture::Gesture;
pub use set::GestureSet;
