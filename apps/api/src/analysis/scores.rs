//! Derived score engine: mastery, profitability and passion alignment.
//!
//! Each score is a weighted combination computed in floating point,
//! truncated toward zero and clamped to 0 – 100. Absent enrichment signals
//! contribute nothing.

use crate::analysis::models::{
    CompetitionTier, DerivedScores, DifficultyResult, IndustryCategory, IndustryClassification,
    MasteryLevel, PassionBucket,
};
use crate::analysis::signals::SignalContext;

const MASTERY_START: f64 = 100.0;
const MASTERY_DIFFICULTY_WEIGHT: f64 = 0.5;
const MASTERY_RELATED_CAP: usize = 10;
const MASTERY_TRAFFIC_BONUS: f64 = 5.0;

const PROFIT_BASE_CATEGORY: f64 = 80.0;
const PROFIT_BASE_OTHER: f64 = 40.0;
const PROFIT_EASE_WEIGHT: f64 = 0.2;

const PASSION_START: i64 = 50;
const PASSION_INTEREST_MATCH: i64 = 25;
const PASSION_INTEREST_MISS: i64 = -10;
const PASSION_AUDIENCE: i64 = 15;
const PASSION_MONETIZATION: i64 = 10;

fn competition_penalty(tier: CompetitionTier) -> f64 {
    match tier {
        CompetitionTier::Low => 0.0,
        CompetitionTier::Medium => 15.0,
        CompetitionTier::High => 30.0,
    }
}

fn competition_adjustment(tier: CompetitionTier) -> f64 {
    match tier {
        CompetitionTier::Low => 20.0,
        CompetitionTier::Medium => 0.0,
        CompetitionTier::High => -15.0,
    }
}

fn truncate_and_clamp(value: f64) -> u32 {
    (value.trunc() as i64).clamp(0, 100) as u32
}

/// How approachable the term is: higher means easier to master.
pub fn mastery_score(context: &SignalContext, difficulty: &DifficultyResult) -> u32 {
    let mut score = MASTERY_START;
    score -= difficulty.score as f64 * MASTERY_DIFFICULTY_WEIGHT;
    score -= competition_penalty(difficulty.competition_tier);
    score += context.related_terms().len().min(MASTERY_RELATED_CAP) as f64;

    let has_visits = context
        .traffic_metrics()
        .and_then(|t| t.total_visits)
        .is_some_and(|visits| visits != 0);
    if has_visits {
        score += MASTERY_TRAFFIC_BONUS;
    }

    truncate_and_clamp(score)
}

/// Monetization potential blending industry, difficulty and competition.
pub fn profitability_score(industry: &IndustryClassification, difficulty: &DifficultyResult) -> u32 {
    let base = if industry.category == IndustryCategory::Other {
        PROFIT_BASE_OTHER
    } else {
        PROFIT_BASE_CATEGORY
    };
    // Confidence scaling truncates before the other terms are added.
    let base = (base * industry.confidence).trunc();

    let ease = (100 - difficulty.score as i64) as f64 * PROFIT_EASE_WEIGHT;
    truncate_and_clamp(base + ease + competition_adjustment(difficulty.competition_tier))
}

/// Inputs that moved the passion score, kept for the narrative reasoning.
#[derive(Debug, Clone, PartialEq)]
pub struct PassionFactors {
    pub score: u32,
    /// `None` when no interests were supplied.
    pub matched_interests: Option<Vec<String>>,
    pub audience_identified: bool,
    pub monetization_identified: bool,
}

/// Sustained-interest fit against the caller's interests and narrative signals.
pub fn passion_factors(context: &SignalContext) -> PassionFactors {
    let mut score = PASSION_START;

    let matched_interests = context.user_interests().map(|interests| {
        let term = context.term_lower();
        interests
            .iter()
            .filter(|interest| {
                let interest = interest.to_lowercase();
                term.contains(&interest) || interest.contains(term)
            })
            .cloned()
            .collect::<Vec<_>>()
    });

    match &matched_interests {
        Some(matches) if !matches.is_empty() => score += PASSION_INTEREST_MATCH,
        Some(_) => score += PASSION_INTEREST_MISS,
        None => {}
    }

    let audience_identified = context.narrative().target_audience.is_some();
    if audience_identified {
        score += PASSION_AUDIENCE;
    }

    let monetization_identified = !context.narrative().monetization_opportunities.is_empty();
    if monetization_identified {
        score += PASSION_MONETIZATION;
    }

    PassionFactors {
        score: score.clamp(0, 100) as u32,
        matched_interests,
        audience_identified,
        monetization_identified,
    }
}

/// All derived scores for one analysis.
pub fn derive_scores(
    context: &SignalContext,
    difficulty: &DifficultyResult,
    industry: &IndustryClassification,
) -> DerivedScores {
    let mastery = mastery_score(context, difficulty);
    let passion = passion_factors(context).score;

    DerivedScores {
        profitability: profitability_score(industry, difficulty),
        mastery_score: mastery,
        mastery_level: MasteryLevel::from_score(mastery),
        passion_score: passion,
        passion_bucket: PassionBucket::from_score(passion),
    }
}
