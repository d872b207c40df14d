//! Output records of a keyword analysis and the enums they are built from.
//!
//! Every record here is produced fresh per call and owned by value inside
//! [`Analysis`]. Nothing is shared or mutated across analyses.

use serde::{Deserialize, Serialize};

use crate::analysis::lenient;

// ────────────────────────────────────────────────────────────────────────────
// Enums
// ────────────────────────────────────────────────────────────────────────────

/// Coarse competition bucket derived from a difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionTier {
    Low,
    Medium,
    High,
}

impl CompetitionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionTier::Low => "Low",
            CompetitionTier::Medium => "Medium",
            CompetitionTier::High => "High",
        }
    }

    /// Case-insensitive parse of a tier name.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(CompetitionTier::Low),
            "medium" => Some(CompetitionTier::Medium),
            "high" => Some(CompetitionTier::High),
            _ => None,
        }
    }
}

/// Fixed industry categories a term can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndustryCategory {
    Wealth,
    Relationships,
    Health,
    Other,
}

impl IndustryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryCategory::Wealth => "Wealth",
            IndustryCategory::Relationships => "Relationships",
            IndustryCategory::Health => "Health",
            IndustryCategory::Other => "Other",
        }
    }
}

/// Named band of the mastery score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MasteryLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl MasteryLevel {
    /// Partitions 0..=100 into [0,30], [31,60], [61,85], [86,100].
    /// Scores above 100 are a clamp bug upstream; they land in `Expert`.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=30 => MasteryLevel::Beginner,
            31..=60 => MasteryLevel::Intermediate,
            61..=85 => MasteryLevel::Advanced,
            _ => MasteryLevel::Expert,
        }
    }
}

/// Bucket of the passion alignment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassionBucket {
    Caution,
    Good,
    Excellent,
}

impl PassionBucket {
    /// <50 → Caution, <75 → Good, otherwise Excellent.
    pub fn from_score(score: u32) -> Self {
        if score < 50 {
            PassionBucket::Caution
        } else if score < 75 {
            PassionBucket::Good
        } else {
            PassionBucket::Excellent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Medium,
    High,
}

// ────────────────────────────────────────────────────────────────────────────
// Enrichment inputs
// ────────────────────────────────────────────────────────────────────────────

/// Free-text fields produced by the narrative collaborator.
///
/// The core only checks presence and does substring matching on these; it
/// never parses them. They are copied verbatim into the final [`Analysis`].
/// Null or wrong-typed fields read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeInsights {
    #[serde(default, deserialize_with = "lenient::string")]
    pub target_audience: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content_strategy: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub monetization_opportunities: Vec<String>,
}

/// Traffic figures for a comparable site. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficMetrics {
    pub rank: Option<u64>,
    pub total_visits: Option<u64>,
    pub bounce_rate_pct: Option<f64>,
    pub organic_share_pct: Option<f64>,
}

impl TrafficMetrics {
    pub fn is_empty(&self) -> bool {
        self.rank.is_none()
            && self.total_visits.is_none()
            && self.bounce_rate_pct.is_none()
            && self.organic_share_pct.is_none()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring outputs
// ────────────────────────────────────────────────────────────────────────────

/// Difficulty score and its tier. The tier is always a function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyResult {
    pub score: u32, // 0 – 100
    pub competition_tier: CompetitionTier,
}

/// Best-matching industry. `confidence == 0.0` exactly when `category == Other`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryClassification {
    pub category: IndustryCategory,
    pub confidence: f64, // 0.0 – 1.0
}

impl IndustryClassification {
    pub fn other() -> Self {
        Self {
            category: IndustryCategory::Other,
            confidence: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedScores {
    pub profitability: u32,
    pub mastery_score: u32,
    pub mastery_level: MasteryLevel,
    pub passion_score: u32,
    pub passion_bucket: PassionBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub day: u32,
    pub action: String,
    pub time_estimate: String,
    pub priority: Priority,
    pub description: String,
}

/// Day-by-day action plan. Shorter plans are strict prefixes of longer ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedToValuePlan {
    pub timeline: String,
    pub total_days: u32, // 3, 5 or 7
    pub steps: Vec<PlanStep>,
    pub quick_wins: Vec<String>,
    pub success_metrics: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Narrative outputs
// ────────────────────────────────────────────────────────────────────────────

/// Category-specific guidance built from fixed templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryNarrative {
    pub summary: String,
    pub revenue_channels: Vec<String>,
    pub content_angles: Vec<String>,
    pub monetization_strategies: Vec<String>,
    pub target_demographics: String,
    pub competition_notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassionAssessment {
    pub score: u32,
    pub bucket: PassionBucket,
    pub reasoning: String,
    pub sustainability: String,
    pub long_term_potential: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyNotes {
    pub improvement_strategy: String,
    pub simplified_approach: String,
    pub creator_focus: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

/// Complete analysis of one term. Identical inputs give an identical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub term: String,
    pub difficulty: DifficultyResult,
    pub industry: IndustryClassification,
    pub scores: DerivedScores,
    pub opportunities: Vec<String>,
    pub competitor_weaknesses: Vec<String>,
    pub speed_to_value_plan: SpeedToValuePlan,
    pub industry_insights: IndustryNarrative,
    pub passion_alignment: PassionAssessment,
    pub strategy: StrategyNotes,
    /// Collaborator text, copied through unchanged (empty when none was supplied).
    pub narrative: NarrativeInsights,
}
