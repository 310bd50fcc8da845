//! Configuration for a practice session.

use serde::{Deserialize, Serialize};
use stroke_kernel::ScoringConfig;

use crate::error::SessionError;
use crate::policy::AttemptPolicy;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    /// Acceptance and retry thresholds.
    pub policy: AttemptPolicy,
    /// Comparator parameters.
    pub scoring: ScoringConfig,
    /// Move on after this many attempts at one stroke. `None` never gives up.
    pub max_attempts_per_stroke: Option<u32>,
}

impl PracticeConfig {
    pub fn with_policy(policy: AttemptPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        self.policy.validate()?;
        self.scoring
            .validate()
            .map_err(|e| SessionError::InvalidConfig(e.to_string()))?;
        if self.max_attempts_per_stroke == Some(0) {
            return Err(SessionError::InvalidConfig(
                "max_attempts_per_stroke must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
