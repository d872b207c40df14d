//! Industry classifier: lexicon-match scoring across the fixed categories.

use tracing::debug;

use crate::analysis::lexicon::IndustryLexicon;
use crate::analysis::models::IndustryClassification;
use crate::analysis::signals::SignalContext;

/// Winning score at which confidence saturates to 1.0.
const CONFIDENCE_SCALE: f64 = 10.0;

/// Classifies the context's term (plus narrative text) into a category.
///
/// The strictly highest score wins. Equal scores resolve to whichever
/// category comes first in `lexicon.categories`. No match at all gives
/// `Other` with confidence 0.
pub fn classify_industry(lexicon: &IndustryLexicon, context: &SignalContext) -> IndustryClassification {
    let text = context.match_text();

    let mut winner: Option<(&_, f64)> = None;
    for entry in &lexicon.categories {
        let score = entry.score(text);
        debug!(category = entry.category.as_str(), score, "Industry lexicon score");

        let beats_current = match winner {
            Some((_, best)) => score > best,
            None => score > 0.0,
        };
        if beats_current {
            winner = Some((entry, score));
        }
    }

    match winner {
        Some((entry, score)) => IndustryClassification {
            category: entry.category,
            confidence: (score / CONFIDENCE_SCALE).min(1.0),
        },
        None => IndustryClassification::other(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{IndustryCategory, NarrativeInsights};
    use crate::analysis::signals::RawSignals;

    fn classify(term: &str) -> IndustryClassification {
        classify_industry(&IndustryLexicon::default(), &SignalContext::for_term(term))
    }

    #[test]
    fn test_single_primary_match() {
        let result = classify("money");
        assert_eq!(result.category, IndustryCategory::Wealth);
        assert!((result.confidence - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_match_is_other_with_zero_confidence() {
        let result = classify("rust compiler");
        assert_eq!(result.category, IndustryCategory::Other);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_tie_prefers_wealth_over_relationships() {
        // one primary match each: "money" and "dating"
        assert_eq!(classify("money dating").category, IndustryCategory::Wealth);
        assert_eq!(classify("dating money").category, IndustryCategory::Wealth);
    }

    #[test]
    fn test_tie_prefers_relationships_over_health() {
        assert_eq!(
            classify("dating yoga").category,
            IndustryCategory::Relationships
        );
    }

    #[test]
    fn test_higher_score_beats_priority() {
        // health: fitness + yoga = 4.0, wealth: money = 2.0
        let result = classify("money fitness yoga");
        assert_eq!(result.category, IndustryCategory::Health);
        assert!((result.confidence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_saturates_at_one() {
        let result = classify("money wealth income revenue profit stock crypto");
        assert_eq!(result.category, IndustryCategory::Wealth);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_narrative_text_contributes_to_matching() {
        let ctx = SignalContext::from_raw(RawSignals {
            term: "wedding planning".to_string(),
            narrative: NarrativeInsights {
                target_audience: Some("Couples planning a wedding".to_string()),
                content_strategy: Some("Guides on budget and savings".to_string()),
                monetization_opportunities: vec![],
            },
            ..Default::default()
        });
        let result = classify_industry(&IndustryLexicon::default(), &ctx);
        // relationships: wedding + couple = 4.0; wealth: budget + savings = 2.0
        assert_eq!(result.category, IndustryCategory::Relationships);
        assert!((result.confidence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_other_iff_zero_confidence() {
        for term in ["money", "rust compiler", "dating yoga", "cashew butter", "gym"] {
            let result = classify(term);
            assert_eq!(
                result.category == IndustryCategory::Other,
                result.confidence == 0.0,
                "invariant broken for {term}"
            );
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
