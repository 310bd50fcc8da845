use gesture_types::{Gesture, GestureSet};
use serde::{Deserialize, Serialize};
use stroke_kernel::{DefaultComparator, Point2d, StrokeComparator};
use tracing::{info, instrument, warn};

use crate::config::PracticeConfig;
use crate::error::SessionError;
use crate::policy::Verdict;

/// Attempts made at one stroke of the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeProgress {
    pub index: u32,
    pub attempts: u32,
    pub best_score: f64,
    pub accepted: bool,
}

/// Result of one submitted attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    /// Gesture index the attempt was scored against.
    pub stroke_index: u32,
    /// 1-based attempt number at this stroke.
    pub attempt: u32,
    pub score: f64,
    pub verdict: Verdict,
    /// The session moved on to the next stroke.
    pub advanced: bool,
    /// That was the last stroke.
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub strokes: Vec<StrokeProgress>,
    pub accepted: usize,
    pub total_attempts: u32,
    /// Mean of the per-stroke best scores; 0 for untouched strokes.
    pub mean_best_score: f64,
    pub finished: bool,
}

/// Walks a learner through the strokes of one character, scoring each
/// attempt against the current reference gesture.
#[derive(Debug)]
pub struct PracticeSession<C = DefaultComparator> {
    gestures: GestureSet,
    config: PracticeConfig,
    comparator: C,
    current: usize,
    progress: Vec<StrokeProgress>,
}

impl PracticeSession<DefaultComparator> {
    pub fn new(gestures: GestureSet, config: PracticeConfig) -> Result<Self, SessionError> {
        let comparator = DefaultComparator::new(config.scoring.clone());
        Self::with_comparator(gestures, config, comparator)
    }
}

impl<C: StrokeComparator> PracticeSession<C> {
    pub fn with_comparator(
        gestures: GestureSet,
        config: PracticeConfig,
        comparator: C,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        if gestures.is_empty() {
            return Err(SessionError::EmptySet);
        }
        let progress = gestures
            .iter()
            .map(|g| StrokeProgress {
                index: g.index,
                attempts: 0,
                best_score: 0.0,
                accepted: false,
            })
            .collect();
        Ok(Self {
            gestures,
            config,
            comparator,
            current: 0,
            progress,
        })
    }

    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    /// The reference stroke the next attempt is scored against.
    pub fn current_gesture(&self) -> Option<&Gesture> {
        self.gestures.nth(self.current)
    }

    /// Position of the current stroke in stroke order.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.gestures.len()
    }

    /// Score `candidate` against the current stroke and advance if the
    /// policy accepts it or its attempts are used up.
    ///
    /// A candidate the comparator cannot read counts as a failed attempt
    /// with score 0.
    #[instrument(skip_all, fields(position = self.current, points = candidate.len()))]
    pub fn submit(&mut self, candidate: &[Point2d]) -> Result<AttemptOutcome, SessionError> {
        let target = self
            .gestures
            .nth(self.current)
            .ok_or(SessionError::Finished)?;
        let stroke_index = target.index;

        let score = match self.comparator.try_evaluate(candidate, &target.points) {
            Ok(score) => score,
            Err(err) => {
                warn!(stroke = stroke_index, error = %err, "attempt could not be scored");
                0.0
            }
        };
        let verdict = self.config.policy.verdict(score);

        let progress = &mut self.progress[self.current];
        progress.attempts += 1;
        progress.best_score = progress.best_score.max(score);
        let attempt = progress.attempts;

        let exhausted = self
            .config
            .max_attempts_per_stroke
            .is_some_and(|max| attempt >= max);
        let advanced = verdict == Verdict::Accepted || exhausted;
        if verdict == Verdict::Accepted {
            progress.accepted = true;
        }
        if advanced {
            self.current += 1;
        }
        let finished = self.is_finished();

        info!(
            stroke = stroke_index,
            attempt,
            score,
            ?verdict,
            advanced,
            "attempt scored"
        );
        if exhausted && verdict != Verdict::Accepted {
            warn!(stroke = stroke_index, attempt, "attempts exhausted, moving on");
        }

        Ok(AttemptOutcome {
            stroke_index,
            attempt,
            score,
            verdict,
            advanced,
            finished,
        })
    }

    /// Give up on the current stroke without another attempt.
    pub fn skip(&mut self) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        info!(position = self.current, "stroke skipped");
        self.current += 1;
        Ok(())
    }

    /// Start over from the first stroke with fresh progress.
    pub fn restart(&mut self) {
        self.current = 0;
        for p in &mut self.progress {
            p.attempts = 0;
            p.best_score = 0.0;
            p.accepted = false;
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let total = self.progress.len().max(1) as f64;
        SessionSummary {
            strokes: self.progress.clone(),
            accepted: self.progress.iter().filter(|p| p.accepted).count(),
            total_attempts: self.progress.iter().map(|p| p.attempts).sum(),
            mean_best_score: self.progress.iter().map(|p| p.best_score).sum::<f64>() / total,
            finished: self.is_finished(),
        }
    }
}
