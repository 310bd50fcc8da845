//! Turning a score into a decision.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// What to do with an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Good enough; move to the next stroke.
    Accepted,
    /// Close; invite another try.
    TryAgain,
    /// Not the stroke that was asked for.
    Rejected,
}

/// Score thresholds for accepting an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttemptPolicy {
    /// Scores at or above this are accepted.
    pub accept_threshold: f64,
    /// Scores at or above this, but below acceptance, get a retry prompt.
    pub retry_threshold: f64,
}

impl Default for AttemptPolicy {
    fn default() -> Self {
        Self {
            accept_threshold: 0.75,
            retry_threshold: 0.5,
        }
    }
}

impl AttemptPolicy {
    /// For first-time learners.
    pub fn lenient() -> Self {
        Self {
            accept_threshold: 0.6,
            retry_threshold: 0.4,
        }
    }

    pub fn strict() -> Self {
        Self {
            accept_threshold: 0.85,
            retry_threshold: 0.65,
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        let (retry, accept) = (self.retry_threshold, self.accept_threshold);
        if !(retry.is_finite() && accept.is_finite()) {
            return Err(SessionError::InvalidConfig(
                "thresholds must be finite".to_string(),
            ));
        }
        if !(0.0 <= retry && retry <= accept && accept <= 1.0) {
            return Err(SessionError::InvalidConfig(format!(
                "thresholds must satisfy 0 <= retry ({retry}) <= accept ({accept}) <= 1"
            )));
        }
        Ok(())
    }

    pub fn verdict(&self, score: f64) -> Verdict {
        if score >= self.accept_threshold {
            Verdict::Accepted
        } else if score >= self.retry_threshold {
            Verdict::TryAgain
        } else {
            Verdict::Rejected
        }
    }
}
