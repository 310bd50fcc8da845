//! Stroke-by-stroke practice against a recorded gesture set.
//!
//! Scores come from a [`stroke_kernel::StrokeComparator`]; an
//! [`AttemptPolicy`] maps them to accept, try-again or reject.

pub mod config;
pub mod error;
pub mod policy;
pub mod session;

pub use config::PracticeConfig;
pub use error::SessionError;
pub use policy::{AttemptPolicy, Verdict};
pub use session::{AttemptOutcome, PracticeSession, SessionSummary, StrokeProgress};
