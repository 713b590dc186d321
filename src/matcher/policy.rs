use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::matcher::MatchResult;
use crate::matcher::constants::{AUTO_ACCEPT_SCORE, MIN_MATCH_SCORE};

/// Score boundaries for the acceptance policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Minimum score for a catalog entry to be a candidate at all.
    pub min_score: f64,
    /// Minimum score for a candidate to be used without confirmation.
    pub auto_accept: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            min_score: MIN_MATCH_SCORE,
            auto_accept: AUTO_ACCEPT_SCORE,
        }
    }
}

impl MatchThresholds {
    pub fn new(min_score: f64, auto_accept: f64) -> Result<Self> {
        let thresholds = Self {
            min_score,
            auto_accept,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.min_score) || !in_range(self.auto_accept) {
            return Err(NutriError::InvalidInput(
                "Match thresholds must be between 0 and 100".to_string(),
            ));
        }
        if self.min_score > self.auto_accept {
            return Err(NutriError::InvalidInput(format!(
                "Minimum score {} must not exceed auto-accept score {}",
                self.min_score, self.auto_accept
            )));
        }
        Ok(())
    }
}

/// What to do with a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Use the match directly.
    AutoAccept,
    /// Ask the user before using the match.
    PendingConfirm,
    /// Discard the query.
    Rejected,
}

/// Classify a score against the thresholds.
pub fn classify(score: f64, thresholds: &MatchThresholds) -> Acceptance {
    if score >= thresholds.auto_accept {
        Acceptance::AutoAccept
    } else if score >= thresholds.min_score {
        Acceptance::PendingConfirm
    } else {
        Acceptance::Rejected
    }
}

/// Classify a matcher result; no candidate is a rejection.
pub fn classify_match(result: Option<&MatchResult>, thresholds: &MatchThresholds) -> Acceptance {
    result.map_or(Acceptance::Rejected, |m| classify(m.score, thresholds))
}

/// Resolve a pending confirmation from the user's answer.
pub fn resolve_confirmation(answer: &str) -> Acceptance {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Acceptance::AutoAccept,
        _ => Acceptance::Rejected,
    }
}
