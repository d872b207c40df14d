//! Research pipeline: gathers enrichment for a term, normalizes it and runs
//! the analysis engine.
//!
//! ```text
//! validate → suggestions + questions → difficulty → narrative → normalize → analyze
//! ```
//!
//! Enrichment is best effort. A failing collaborator is logged and its signal
//! is treated as absent; only validation and task failures surface as errors.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::analysis::engine::AnalysisEngine;
use crate::analysis::lenient;
use crate::analysis::models::{Analysis, CompetitionTier, NarrativeInsights};
use crate::analysis::signals::{RawSignals, SignalContext};
use crate::enrichment::{NarrativeRequest, NarrativeSource, SuggestionSource};
use crate::errors::AppError;

/// Related searches requested per researched term.
pub const RELATED_TERMS_LIMIT: usize = 10;

fn default_true() -> bool {
    true
}

/// Input for researching one term. Only `term` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchRequest {
    pub term: String,
    #[serde(default = "default_true")]
    pub include_related: bool,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub difficulty: Option<i64>,
    /// Informational only; an unknown label reads as absent.
    #[serde(default, deserialize_with = "lenient::competition")]
    pub competition: Option<CompetitionTier>,
    #[serde(default, deserialize_with = "lenient::optional_string_list")]
    pub user_interests: Option<Vec<String>>,
    #[serde(default)]
    pub traffic_metrics: Option<Value>,
    /// Used verbatim instead of asking the narrative source.
    #[serde(default, deserialize_with = "lenient::narrative")]
    pub narrative: Option<NarrativeInsights>,
}

impl ResearchRequest {
    pub fn for_term(term: impl Into<String>, include_related: bool) -> Self {
        Self {
            term: term.into(),
            include_related,
            difficulty: None,
            competition: None,
            user_interests: None,
            traffic_metrics: None,
            narrative: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchResult {
    pub term: String,
    pub related_terms: Vec<String>,
    pub questions: Vec<String>,
    pub analysis: Analysis,
    pub analyzed_at: DateTime<Utc>,
}

/// Runs research requests against the shared engine and collaborators.
#[derive(Clone)]
pub struct Researcher {
    engine: Arc<AnalysisEngine>,
    suggestions: Arc<dyn SuggestionSource>,
    narrative: Arc<dyn NarrativeSource>,
    batch_max_terms: usize,
    batch_concurrency: usize,
}

impl Researcher {
    pub fn new(
        engine: Arc<AnalysisEngine>,
        suggestions: Arc<dyn SuggestionSource>,
        narrative: Arc<dyn NarrativeSource>,
        batch_max_terms: usize,
        batch_concurrency: usize,
    ) -> Self {
        Self {
            engine,
            suggestions,
            narrative,
            batch_max_terms,
            batch_concurrency: batch_concurrency.max(1),
        }
    }

    pub fn engine(&self) -> &AnalysisEngine {
        &self.engine
    }

    pub fn suggestions(&self) -> &dyn SuggestionSource {
        self.suggestions.as_ref()
    }

    pub async fn research(&self, request: ResearchRequest) -> Result<ResearchResult, AppError> {
        let term = request.term.trim().to_string();
        if term.is_empty() {
            return Err(AppError::Validation("term must not be empty".to_string()));
        }

        let (related_terms, questions) = if request.include_related {
            let related = match self.suggestions.suggestions(&term, RELATED_TERMS_LIMIT).await {
                Ok(related) => related,
                Err(e) => {
                    warn!(term = %term, error = %e, "Suggestion lookup failed, continuing without related terms");
                    Vec::new()
                }
            };
            (related, self.suggestions.questions(&term).await)
        } else {
            (Vec::new(), Vec::new())
        };

        let narrative = match request.narrative {
            Some(supplied) => supplied,
            None => {
                let difficulty = self.engine.assess(&term, request.difficulty);
                let narrative_request = NarrativeRequest {
                    term: term.clone(),
                    difficulty: difficulty.score,
                    competition: difficulty.competition_tier,
                    related_terms: related_terms.clone(),
                };
                match self.narrative.insights(&narrative_request).await {
                    Ok(insights) => insights,
                    Err(e) => {
                        warn!(term = %term, error = %e, "Narrative enrichment failed, continuing without it");
                        NarrativeInsights::default()
                    }
                }
            }
        };

        let context = SignalContext::from_raw(RawSignals {
            term: term.clone(),
            difficulty: request.difficulty,
            competition: request.competition,
            related_terms: related_terms.clone(),
            narrative,
            traffic_metrics: request.traffic_metrics,
            user_interests: request.user_interests,
        });
        let analysis = self.engine.analyze(&context);

        info!(
            term = %term,
            difficulty = analysis.difficulty.score,
            industry = analysis.industry.category.as_str(),
            related = related_terms.len(),
            "Keyword researched"
        );

        Ok(ResearchResult {
            term,
            related_terms,
            questions,
            analysis,
            analyzed_at: Utc::now(),
        })
    }

    /// Researches every term concurrently and returns results in input order.
    pub async fn research_batch(
        &self,
        terms: Vec<String>,
        include_related: bool,
    ) -> Result<Vec<ResearchResult>, AppError> {
        if terms.is_empty() {
            return Err(AppError::Validation("terms must not be empty".to_string()));
        }
        if terms.len() > self.batch_max_terms {
            return Err(AppError::Validation(format!(
                "a batch may contain at most {} terms (got {})",
                self.batch_max_terms,
                terms.len()
            )));
        }
        if let Some(index) = terms.iter().position(|t| t.trim().is_empty()) {
            return Err(AppError::Validation(format!("terms[{index}] must not be empty")));
        }

        let semaphore = Arc::new(Semaphore::new(self.batch_concurrency));
        let mut tasks = JoinSet::new();
        let count = terms.len();

        for (index, term) in terms.into_iter().enumerate() {
            let researcher = self.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => {
                        researcher
                            .research(ResearchRequest::for_term(term, include_related))
                            .await
                    }
                    Err(e) => Err(AppError::Internal(e.into())),
                };
                (index, result)
            });
        }

        let mut results = Vec::with_capacity(count);
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| AppError::Internal(e.into()))?;
            results.push((index, result?));
        }
        results.sort_by_key(|(index, _)| *index);

        info!(count, "Batch research complete");
        Ok(results.into_iter().map(|(_, result)| result).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::IndustryCategory;
    use crate::enrichment::stubs::{StubNarrative, StubSuggestions};
    use crate::enrichment::DisabledNarrative;

    fn researcher(suggestions: StubSuggestions, narrative: Arc<dyn NarrativeSource>) -> Researcher {
        Researcher::new(
            Arc::new(AnalysisEngine::default()),
            Arc::new(suggestions),
            narrative,
            3,
            2,
        )
    }

    fn sample_insights() -> NarrativeInsights {
        NarrativeInsights {
            target_audience: Some("Home cooks".to_string()),
            content_strategy: Some("Step-by-step recipe videos".to_string()),
            monetization_opportunities: vec!["Cookbook".to_string()],
        }
    }

    #[tokio::test]
    async fn test_research_collects_related_terms_and_questions() {
        let stub = StubSuggestions::with(vec![
            ("sourdough", vec!["sourdough starter", "sourdough bread"]),
            ("how to sourdough", vec!["how to sourdough starter"]),
        ]);
        let r = researcher(stub, Arc::new(DisabledNarrative));

        let result = r
            .research(ResearchRequest::for_term("  sourdough ", true))
            .await
            .unwrap();

        assert_eq!(result.term, "sourdough");
        assert_eq!(result.related_terms, vec!["sourdough starter", "sourdough bread"]);
        assert_eq!(result.questions, vec!["how to sourdough starter"]);
        // 100 - 35 - 30 + 2
        assert_eq!(result.analysis.scores.mastery_score, 37);
    }

    #[tokio::test]
    async fn test_research_skips_suggestions_when_not_requested() {
        let stub = StubSuggestions::with(vec![("sourdough", vec!["sourdough starter"])]);
        let r = researcher(stub, Arc::new(DisabledNarrative));
        let result = r
            .research(ResearchRequest::for_term("sourdough", false))
            .await
            .unwrap();
        assert!(result.related_terms.is_empty());
        assert!(result.questions.is_empty());
    }

    #[tokio::test]
    async fn test_research_survives_failing_collaborators() {
        let r = researcher(
            StubSuggestions::failing(),
            Arc::new(StubNarrative { insights: None }),
        );
        let result = r
            .research(ResearchRequest::for_term("money", true))
            .await
            .unwrap();
        assert!(result.related_terms.is_empty());
        assert_eq!(result.analysis.narrative, NarrativeInsights::default());
        assert_eq!(result.analysis.scores.profitability, 7);
    }

    #[tokio::test]
    async fn test_research_uses_narrative_source() {
        let r = researcher(
            StubSuggestions::default(),
            Arc::new(StubNarrative {
                insights: Some(sample_insights()),
            }),
        );
        let result = r
            .research(ResearchRequest::for_term("bread baking", false))
            .await
            .unwrap();
        assert_eq!(result.analysis.narrative, sample_insights());
        // 50 + audience 15 + monetization 10
        assert_eq!(result.analysis.scores.passion_score, 75);
    }

    #[tokio::test]
    async fn test_supplied_narrative_wins_over_source() {
        let r = researcher(
            StubSuggestions::default(),
            Arc::new(StubNarrative {
                insights: Some(sample_insights()),
            }),
        );
        let supplied = NarrativeInsights {
            target_audience: Some("Newly engaged couples".to_string()),
            ..Default::default()
        };
        let request = ResearchRequest {
            narrative: Some(supplied.clone()),
            ..ResearchRequest::for_term("wedding venues", false)
        };
        let result = r.research(request).await.unwrap();
        assert_eq!(result.analysis.narrative, supplied);
        assert_eq!(
            result.analysis.industry.category,
            IndustryCategory::Relationships
        );
    }

    #[tokio::test]
    async fn test_research_rejects_blank_term() {
        let r = researcher(StubSuggestions::default(), Arc::new(DisabledNarrative));
        let err = r
            .research(ResearchRequest::for_term("   ", true))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let r = researcher(StubSuggestions::default(), Arc::new(DisabledNarrative));
        let terms = vec![
            "money".to_string(),
            "rust compiler".to_string(),
            "how to invest in stocks for beginners".to_string(),
        ];
        let results = r.research_batch(terms.clone(), false).await.unwrap();
        let returned: Vec<&str> = results.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(returned, terms.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(results[0].analysis.difficulty.score, 70);
        assert_eq!(results[2].analysis.difficulty.score, 25);
    }

    #[tokio::test]
    async fn test_batch_rejects_empty_and_oversized() {
        let r = researcher(StubSuggestions::default(), Arc::new(DisabledNarrative));
        assert!(matches!(
            r.research_batch(vec![], false).await,
            Err(AppError::Validation(_))
        ));
        let too_many: Vec<String> = (0..4).map(|i| format!("term {i}")).collect();
        assert!(matches!(
            r.research_batch(too_many, false).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_batch_rejects_blank_entry() {
        let r = researcher(StubSuggestions::default(), Arc::new(DisabledNarrative));
        let err = r
            .research_batch(vec!["yoga".to_string(), " ".to_string()], false)
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("terms[1]")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_request_defaults_include_related() {
        let request: ResearchRequest = serde_json::from_str(r#"{"term": "yoga"}"#).unwrap();
        assert!(request.include_related);
        assert!(request.narrative.is_none());
    }

    #[test]
    fn test_request_tolerates_malformed_enrichment() {
        let request: ResearchRequest = serde_json::from_str(
            r#"{"term": "yoga", "difficulty": "hard", "competition": "low",
                "user_interests": "stretching",
                "narrative": {"target_audience": "Runners", "monetization_opportunities": null}}"#,
        )
        .unwrap();
        assert!(request.difficulty.is_none());
        assert_eq!(request.competition, Some(CompetitionTier::Low));
        assert!(request.user_interests.is_none());
        let narrative = request.narrative.unwrap();
        assert_eq!(narrative.target_audience.as_deref(), Some("Runners"));
        assert!(narrative.monetization_opportunities.is_empty());
    }

    #[test]
    fn test_request_drops_non_object_narrative_and_unknown_label() {
        let request: ResearchRequest = serde_json::from_str(
            r#"{"term": "yoga", "competition": "fierce", "narrative": ["Runners"]}"#,
        )
        .unwrap();
        assert!(request.competition.is_none());
        assert!(request.narrative.is_none());
    }
}
