//! Rule tables for opportunity and competitor-weakness lists.
//!
//! Both lists start from a table keyed by competition tier. Conditional
//! entries are then added and the result is cut to a fixed length.

use crate::analysis::difficulty::TierThresholds;
use crate::analysis::models::{CompetitionTier, DifficultyResult, TrafficMetrics};

pub const MAX_OPPORTUNITIES: usize = 6;
pub const MAX_WEAKNESSES: usize = 7;

const HIGH_BOUNCE_PCT: f64 = 60.0;
const LOW_ORGANIC_PCT: f64 = 30.0;

const QUICK_WIN_OPPORTUNITY: &str =
    "QUICK WIN: low competition and low difficulty - fast path to traffic and monetization.";

const LOW_OPPORTUNITIES: &[&str] = &[
    "Few established players - claim the top positions before others notice this term",
    "A single comprehensive pillar page can rank quickly",
    "Build topical authority with a small cluster of supporting articles",
    "Capture early email subscribers from first-mover traffic",
    "Test monetization cheaply while acquisition costs are low",
    "Expand into adjacent related terms once the first page ranks",
];

const MEDIUM_OPPORTUNITIES: &[&str] = &[
    "Differentiate on design and user experience",
    "Go deeper than competitors with original data and worked examples",
    "Target question-style variations that competitors answer poorly",
    "Add multimedia (videos, infographics, interactive tools)",
    "Build trust signals: testimonials, case studies, credentials",
    "Refresh content regularly to overtake stale pages",
];

const HIGH_OPPORTUNITIES: &[&str] = &[
    "Proven demand - the audience and the ad budgets already exist",
    "Own a specific sub-niche instead of the head term",
    "Refresh outdated content that incumbents have neglected",
    "Win on mobile experience and page speed",
    "Stand out with a distinctive, personality-driven voice",
    "Borrow authority through partnerships and guest content",
];

const LOW_WEAKNESSES: &[&str] = &[
    "Minimal competition (huge opportunity!)",
    "Low-quality content (easy to outrank with quality)",
    "No clear authority (establish yourself as the expert)",
    "Poor SEO optimization (basic optimization will win)",
    "Limited content variety (diversify content types)",
];

const MEDIUM_WEAKNESSES: &[&str] = &[
    "Inconsistent content quality (maintain high standards)",
    "Poor user experience (focus on intuitive design)",
    "Limited content depth (go deeper than competitors)",
    "Weak social proof (build trust signals)",
    "Missing multimedia (add videos, infographics, interactive elements)",
];

const HIGH_WEAKNESSES: &[&str] = &[
    "Outdated content (many high-competition sites haven't updated in years)",
    "Poor mobile experience (focus on mobile-first design)",
    "Slow load times (optimize for speed)",
    "Generic content (create unique, personality-driven content)",
    "Weak monetization (implement better revenue strategies)",
];

fn opportunity_table(tier: CompetitionTier) -> &'static [&'static str] {
    match tier {
        CompetitionTier::Low => LOW_OPPORTUNITIES,
        CompetitionTier::Medium => MEDIUM_OPPORTUNITIES,
        CompetitionTier::High => HIGH_OPPORTUNITIES,
    }
}

fn weakness_table(tier: CompetitionTier) -> &'static [&'static str] {
    match tier {
        CompetitionTier::Low => LOW_WEAKNESSES,
        CompetitionTier::Medium => MEDIUM_WEAKNESSES,
        CompetitionTier::High => HIGH_WEAKNESSES,
    }
}

/// True when both the score and the tier point to an easy win.
pub fn is_quick_win(difficulty: &DifficultyResult, tiers: &TierThresholds) -> bool {
    difficulty.score < tiers.medium_from && difficulty.competition_tier == CompetitionTier::Low
}

/// Prepends `lead` (if any) to `table` and keeps the first `cap` entries.
pub(crate) fn lead_then_table(lead: Option<&str>, table: &[&str], cap: usize) -> Vec<String> {
    lead.into_iter()
        .chain(table.iter().copied())
        .take(cap)
        .map(str::to_string)
        .collect()
}

/// Opportunities for the difficulty's tier, quick win first when it applies.
pub fn opportunities(difficulty: &DifficultyResult, tiers: &TierThresholds) -> Vec<String> {
    let lead = is_quick_win(difficulty, tiers).then_some(QUICK_WIN_OPPORTUNITY);
    lead_then_table(lead, opportunity_table(difficulty.competition_tier), MAX_OPPORTUNITIES)
}

/// Competitor weaknesses for the tier, followed by traffic- and
/// difficulty-driven entries. Traffic entries need the field to be present.
/// The difficulty notes use the tier breakpoints: below `medium_from` is
/// easy, above `high_from` is hard.
pub fn competitor_weaknesses(
    difficulty: &DifficultyResult,
    tiers: &TierThresholds,
    traffic: Option<&TrafficMetrics>,
) -> Vec<String> {
    let mut weaknesses: Vec<String> = weakness_table(difficulty.competition_tier)
        .iter()
        .map(|w| w.to_string())
        .collect();

    if let Some(traffic) = traffic {
        if let Some(bounce) = traffic.bounce_rate_pct.filter(|b| *b > HIGH_BOUNCE_PCT) {
            weaknesses.push(format!(
                "High bounce rate ({bounce}%) - improve engagement and UX"
            ));
        }
        if let Some(organic) = traffic.organic_share_pct.filter(|o| *o < LOW_ORGANIC_PCT) {
            weaknesses.push(format!("Low organic traffic ({organic}%) - SEO opportunity"));
        }
    }

    if difficulty.score < tiers.medium_from {
        weaknesses.push("Low difficulty - quick wins possible with basic optimization".to_string());
    } else if difficulty.score > tiers.high_from {
        weaknesses
            .push("High difficulty - focus on long-tail variations and niche angles".to_string());
    }

    weaknesses.truncate(MAX_WEAKNESSES);
    weaknesses
}
