//! Difficulty & competition estimator.
//!
//! Heuristic (no override supplied):
//! 1. start at 50
//! 2. exactly one token → +20; four or more tokens → −20
//! 3. commercial-intent substring present → +10
//! 4. informational substring present → −5
//! 5. clamp to 0 – 100
//!
//! The tier is always read off the final score through [`TierThresholds`],
//! the only tier function in the crate.

use tracing::debug;

use crate::analysis::models::{CompetitionTier, DifficultyResult};

/// Score breakpoints for the competition tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Scores below this are Low.
    pub medium_from: u32,
    /// Scores at or above this are High.
    pub high_from: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medium_from: 40,
            high_from: 70,
        }
    }
}

impl TierThresholds {
    pub fn tier(&self, score: u32) -> CompetitionTier {
        if score < self.medium_from {
            CompetitionTier::Low
        } else if score < self.high_from {
            CompetitionTier::Medium
        } else {
            CompetitionTier::High
        }
    }
}

/// Token-pattern weights for the difficulty heuristic.
#[derive(Debug, Clone)]
pub struct DifficultyRules {
    pub baseline: i64,
    pub single_word_adjustment: i64,
    pub long_tail_min_words: usize,
    pub long_tail_adjustment: i64,
    pub commercial_terms: &'static [&'static str],
    pub commercial_adjustment: i64,
    pub informational_terms: &'static [&'static str],
    pub informational_adjustment: i64,
}

impl Default for DifficultyRules {
    fn default() -> Self {
        Self {
            baseline: 50,
            single_word_adjustment: 20,
            long_tail_min_words: 4,
            long_tail_adjustment: -20,
            commercial_terms: &["best", "top", "review"],
            commercial_adjustment: 10,
            informational_terms: &["how", "what", "why", "guide"],
            informational_adjustment: -5,
        }
    }
}

impl DifficultyRules {
    /// Heuristic score for a lower-cased term. Intent terms are matched as
    /// substrings, so "show" counts as informational.
    pub fn estimate(&self, term_lower: &str) -> u32 {
        let mut score = self.baseline;

        let word_count = term_lower.split_whitespace().count();
        if word_count == 1 {
            score += self.single_word_adjustment;
        } else if word_count >= self.long_tail_min_words {
            score += self.long_tail_adjustment;
        }

        if self.commercial_terms.iter().any(|t| term_lower.contains(t)) {
            score += self.commercial_adjustment;
        }
        if self.informational_terms.iter().any(|t| term_lower.contains(t)) {
            score += self.informational_adjustment;
        }

        clamp_score(score)
    }
}

/// Difficulty for a term, honoring an explicit override when one is given.
pub fn assess_difficulty(
    rules: &DifficultyRules,
    tiers: &TierThresholds,
    term_lower: &str,
    override_score: Option<i64>,
) -> DifficultyResult {
    let score = match override_score {
        Some(value) => {
            debug!(value, "Using supplied difficulty");
            clamp_score(value)
        }
        None => rules.estimate(term_lower),
    };

    DifficultyResult {
        score,
        competition_tier: tiers.tier(score),
    }
}

pub(crate) fn clamp_score(value: i64) -> u32 {
    value.clamp(0, 100) as u32
}
