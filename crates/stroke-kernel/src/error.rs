use thiserror::Error;

/// Which side of a comparison an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeRole {
    User,
    Target,
}

impl std::fmt::Display for StrokeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrokeRole::User => f.write_str("user"),
            StrokeRole::Target => f.write_str("target"),
        }
    }
}

/// Malformed input to the comparator.
///
/// Degenerate geometry (too few points, zero extent) is not an error; it
/// scores 0.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    #[error("{role} stroke has a non-finite coordinate at point {index}")]
    NonFinitePoint { role: StrokeRole, index: usize },
    #[error("invalid scoring configuration: {reason}")]
    InvalidConfig { reason: String },
}
