//! Analysis engine: runs every scorer over one [`SignalContext`] and
//! assembles the [`Analysis`] record.
//!
//! Pure and synchronous: no I/O, no clock, no shared state. Two calls with
//! equal contexts return equal records.

use tracing::debug;

use crate::analysis::difficulty::{assess_difficulty, DifficultyRules, TierThresholds};
use crate::analysis::industry::classify_industry;
use crate::analysis::lexicon::IndustryLexicon;
use crate::analysis::models::{Analysis, DifficultyResult};
use crate::analysis::narrative::{industry_narrative, passion_assessment, strategy_notes};
use crate::analysis::plan::speed_to_value_plan;
use crate::analysis::rules::{competitor_weaknesses, opportunities};
use crate::analysis::scores::{derive_scores, passion_factors};
use crate::analysis::signals::SignalContext;

/// Tunable tables behind the scorers. `Default` is the production setup.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub tiers: TierThresholds,
    pub difficulty: DifficultyRules,
    pub lexicon: IndustryLexicon,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: ScoringConfig,
}

impl AnalysisEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Difficulty alone, for callers that do not need the full record.
    pub fn assess(&self, term: &str, override_score: Option<i64>) -> DifficultyResult {
        assess_difficulty(
            &self.config.difficulty,
            &self.config.tiers,
            &term.trim().to_lowercase(),
            override_score,
        )
    }

    pub fn analyze(&self, context: &SignalContext) -> Analysis {
        let difficulty = assess_difficulty(
            &self.config.difficulty,
            &self.config.tiers,
            context.term_lower(),
            context.difficulty_override(),
        );

        // The label is informational only; the tier always follows the score.
        if let Some(label) = context.competition_label() {
            if label != difficulty.competition_tier {
                debug!(
                    supplied = label.as_str(),
                    derived = difficulty.competition_tier.as_str(),
                    "Supplied competition label disagrees with difficulty tier"
                );
            }
        }

        let industry = classify_industry(&self.config.lexicon, context);
        let scores = derive_scores(context, &difficulty, &industry);
        let factors = passion_factors(context);

        let tiers = &self.config.tiers;
        let opportunities = opportunities(&difficulty, tiers);
        let competitor_weaknesses =
            competitor_weaknesses(&difficulty, tiers, context.traffic_metrics());
        let plan = speed_to_value_plan(
            context.term(),
            difficulty.score,
            tiers,
            context.narrative().content_strategy.as_deref(),
        );

        let strategy = strategy_notes(
            context.term(),
            scores.mastery_level,
            &competitor_weaknesses,
            &plan,
            scores.passion_score,
            &context.narrative().monetization_opportunities,
        );

        debug!(
            term = context.term(),
            difficulty = difficulty.score,
            industry = industry.category.as_str(),
            profitability = scores.profitability,
            mastery = scores.mastery_score,
            passion = scores.passion_score,
            "Analysis complete"
        );

        Analysis {
            term: context.term().to_string(),
            difficulty,
            industry_insights: industry_narrative(context.term(), &industry, &difficulty, tiers),
            industry,
            scores,
            opportunities,
            competitor_weaknesses,
            speed_to_value_plan: plan,
            passion_alignment: passion_assessment(&factors),
            strategy,
            narrative: context.narrative().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{
        CompetitionTier, IndustryCategory, MasteryLevel, NarrativeInsights, PassionBucket,
    };
    use crate::analysis::signals::RawSignals;
    use serde_json::json;

    fn analyze(raw: RawSignals) -> Analysis {
        AnalysisEngine::default().analyze(&SignalContext::from_raw(raw))
    }

    fn term(term: &str) -> RawSignals {
        RawSignals {
            term: term.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_word_wealth_term() {
        let analysis = analyze(term("money"));
        assert_eq!(analysis.difficulty.score, 70);
        assert_eq!(analysis.difficulty.competition_tier, CompetitionTier::High);
        assert_eq!(analysis.industry.category, IndustryCategory::Wealth);
        assert!((analysis.industry.confidence - 0.2).abs() < 1e-9);
        assert_eq!(analysis.scores.profitability, 7);
        assert_eq!(analysis.scores.mastery_score, 35);
        assert_eq!(analysis.scores.mastery_level, MasteryLevel::Intermediate);
        assert_eq!(analysis.speed_to_value_plan.total_days, 7);
    }

    #[test]
    fn test_long_tail_informational_term() {
        let analysis = analyze(term("how to invest in stocks for beginners"));
        assert_eq!(analysis.difficulty.score, 25);
        assert_eq!(analysis.difficulty.competition_tier, CompetitionTier::Low);
        assert_eq!(analysis.industry.category, IndustryCategory::Wealth);
        assert_eq!(analysis.scores.profitability, 51);
        assert_eq!(analysis.scores.mastery_score, 87);
        assert_eq!(analysis.scores.mastery_level, MasteryLevel::Expert);
        assert_eq!(analysis.speed_to_value_plan.total_days, 3);
        assert!(analysis.opportunities[0].starts_with("QUICK WIN"));
        assert!(analysis.competitor_weaknesses.iter().any(|w| w.contains("quick wins")));
    }

    #[test]
    fn test_unclassified_two_word_term() {
        let analysis = analyze(term("rust compiler"));
        assert_eq!(analysis.difficulty.score, 50);
        assert_eq!(analysis.difficulty.competition_tier, CompetitionTier::Medium);
        assert_eq!(analysis.industry.category, IndustryCategory::Other);
        assert_eq!(analysis.industry.confidence, 0.0);
        assert_eq!(analysis.scores.profitability, 10);
        assert_eq!(analysis.scores.mastery_score, 60);
        assert_eq!(analysis.scores.passion_score, 50);
        assert_eq!(analysis.scores.passion_bucket, PassionBucket::Good);
        assert_eq!(analysis.speed_to_value_plan.total_days, 5);
        assert_eq!(analysis.competitor_weaknesses.len(), 5);
    }

    #[test]
    fn test_full_enrichment() {
        let analysis = analyze(RawSignals {
            term: "Yoga For Runners".to_string(),
            difficulty: Some(120),
            competition: Some(CompetitionTier::Low),
            related_terms: vec!["yoga stretches".to_string(), "runner mobility".to_string()],
            narrative: NarrativeInsights {
                target_audience: Some("Amateur runners".to_string()),
                content_strategy: Some("Short follow-along videos".to_string()),
                monetization_opportunities: vec!["Paid program".to_string()],
            },
            traffic_metrics: Some(json!({"total_visits": 5000, "bounce_rate": 65.0})),
            user_interests: Some(vec!["yoga".to_string()]),
        });

        // Override is clamped and the supplied label does not change the tier.
        assert_eq!(analysis.difficulty.score, 100);
        assert_eq!(analysis.difficulty.competition_tier, CompetitionTier::High);
        assert_eq!(analysis.term, "Yoga For Runners");
        assert_eq!(analysis.industry.category, IndustryCategory::Health);
        // 100 - 50 - 30 + 2 + 5
        assert_eq!(analysis.scores.mastery_score, 27);
        assert_eq!(analysis.scores.passion_score, 100);
        assert!(analysis
            .competitor_weaknesses
            .iter()
            .any(|w| w.starts_with("High bounce rate (65%)")));
        assert_eq!(
            analysis.speed_to_value_plan.steps[1].description,
            "Implement content strategy: Short follow-along videos..."
        );
        assert!(analysis.strategy.creator_focus.contains("Monetization: Paid program"));
        assert_eq!(analysis.narrative.target_audience.as_deref(), Some("Amateur runners"));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let raw = RawSignals {
            term: "best fitness tracker review".to_string(),
            related_terms: vec!["fitness watch".to_string()],
            user_interests: Some(vec!["running".to_string()]),
            ..Default::default()
        };
        let engine = AnalysisEngine::default();
        let context = SignalContext::from_raw(raw);
        let first = serde_json::to_string(&engine.analyze(&context)).unwrap();
        let second = serde_json::to_string(&engine.analyze(&context)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_assess_normalizes_term() {
        let engine = AnalysisEngine::default();
        assert_eq!(engine.assess("  MONEY ", None).score, 70);
        assert_eq!(engine.assess("money", Some(-5)).score, 0);
        assert_eq!(
            engine.assess("money", Some(-5)).competition_tier,
            CompetitionTier::Low
        );
    }

    #[test]
    fn test_custom_tier_thresholds() {
        let engine = AnalysisEngine::new(ScoringConfig {
            tiers: TierThresholds {
                medium_from: 20,
                high_from: 50,
            },
            ..Default::default()
        });
        let analysis = engine.analyze(&SignalContext::for_term("rust compiler"));
        assert_eq!(analysis.difficulty.competition_tier, CompetitionTier::High);
        assert_eq!(analysis.speed_to_value_plan.total_days, 7);
    }

    #[test]
    fn test_rules_and_plan_share_custom_tier_breakpoints() {
        let engine = AnalysisEngine::new(ScoringConfig {
            tiers: TierThresholds {
                medium_from: 20,
                high_from: 50,
            },
            ..Default::default()
        });
        let analysis = engine.analyze(&SignalContext::from_raw(RawSignals {
            difficulty: Some(30),
            ..term("rust compiler")
        }));
        assert_eq!(analysis.difficulty.competition_tier, CompetitionTier::Medium);
        assert_eq!(analysis.speed_to_value_plan.total_days, 5);
        assert!(!analysis.opportunities[0].starts_with("QUICK WIN"));
        assert!(!analysis
            .competitor_weaknesses
            .iter()
            .any(|w| w.contains("quick wins")));

        let hard = engine.analyze(&SignalContext::from_raw(RawSignals {
            difficulty: Some(60),
            ..term("rust compiler")
        }));
        assert_eq!(hard.speed_to_value_plan.total_days, 7);
        assert!(hard
            .competitor_weaknesses
            .last()
            .unwrap()
            .contains("long-tail"));
    }
}
