//! Enrichment collaborators: pluggable, trait-based sources of related
//! searches and narrative text.
//!
//! `AppState` holds each source as an `Arc<dyn _>`; tests swap in stubs.
//! A failing source never fails an analysis: the research pipeline logs the
//! error and carries on without that signal.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::analysis::models::NarrativeInsights;
use crate::llm_client::LlmError;

pub mod narrative;
pub mod prompts;
pub mod suggestions;

pub use narrative::{DisabledNarrative, LlmNarrativeSource, NarrativeRequest};
pub use suggestions::HttpSuggestionSource;

/// Suggestions requested per question template.
const SUGGESTIONS_PER_QUESTION: usize = 2;
/// Maximum number of question-style searches returned.
pub const MAX_QUESTIONS: usize = 10;

/// Question prefixes used to expand a term into question-style searches.
pub const QUESTION_TEMPLATES: [&str; 5] = ["what is", "how to", "why", "when to", "where to"];

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("suggestion endpoint returned status {0}")]
    Status(u16),

    #[error("unexpected suggestion payload: {0}")]
    Payload(String),
}

/// Source of related search terms for a seed term.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggestions(&self, term: &str, max_results: usize)
        -> Result<Vec<String>, SuggestError>;

    /// Question-style searches around `term`. Each template contributes up to
    /// two suggestions; duplicates keep their first position. A failing
    /// template contributes nothing.
    async fn questions(&self, term: &str) -> Vec<String> {
        let mut questions: Vec<String> = Vec::new();

        for template in QUESTION_TEMPLATES {
            let query = format!("{template} {term}");
            match self.suggestions(&query, SUGGESTIONS_PER_QUESTION).await {
                Ok(found) => {
                    for question in found.into_iter().take(SUGGESTIONS_PER_QUESTION) {
                        if !questions.contains(&question) {
                            questions.push(question);
                        }
                    }
                }
                Err(e) => warn!(query = %query, error = %e, "Question lookup failed"),
            }
        }

        questions.truncate(MAX_QUESTIONS);
        questions
    }
}

/// Source of free-text narrative insights (audience, strategy, monetization).
#[async_trait]
pub trait NarrativeSource: Send + Sync {
    async fn insights(&self, request: &NarrativeRequest) -> Result<NarrativeInsights, LlmError>;
}

#[cfg(test)]
pub(crate) mod stubs {
    //! In-memory collaborators shared by the pipeline and router tests.

    use std::collections::HashMap;

    use super::*;

    /// Canned suggestions keyed by query. Unknown queries return nothing;
    /// `failing` makes every call error.
    #[derive(Default)]
    pub struct StubSuggestions {
        pub responses: HashMap<String, Vec<String>>,
        pub failing: bool,
    }

    impl StubSuggestions {
        pub fn with(pairs: Vec<(&str, Vec<&str>)>) -> Self {
            Self {
                responses: pairs
                    .into_iter()
                    .map(|(q, s)| (q.to_string(), s.into_iter().map(String::from).collect()))
                    .collect(),
                failing: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl SuggestionSource for StubSuggestions {
        async fn suggestions(
            &self,
            term: &str,
            max_results: usize,
        ) -> Result<Vec<String>, SuggestError> {
            if self.failing {
                return Err(SuggestError::Status(503));
            }
            Ok(self
                .responses
                .get(term)
                .map(|s| s.iter().take(max_results).cloned().collect())
                .unwrap_or_default())
        }
    }

    /// Returns fixed insights, or fails when `insights` is `None`.
    pub struct StubNarrative {
        pub insights: Option<NarrativeInsights>,
    }

    #[async_trait]
    impl NarrativeSource for StubNarrative {
        async fn insights(&self, _request: &NarrativeRequest) -> Result<NarrativeInsights, LlmError> {
            self.insights.clone().ok_or(LlmError::EmptyContent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stubs::StubSuggestions;
    use super::*;

    #[tokio::test]
    async fn test_questions_dedupe_keep_first_occurrence() {
        let source = StubSuggestions::with(vec![
            ("what is yoga", vec!["what is yoga", "what is yoga nidra", "what is yoga therapy"]),
            ("how to yoga", vec!["how to yoga at home", "what is yoga"]),
            ("why yoga", vec!["why yoga matters"]),
        ]);
        let questions = source.questions("yoga").await;
        assert_eq!(
            questions,
            vec![
                "what is yoga",
                "what is yoga nidra",
                "how to yoga at home",
                "why yoga matters",
            ]
        );
    }

    #[tokio::test]
    async fn test_questions_capped_at_ten() {
        let pairs: Vec<(String, Vec<String>)> = QUESTION_TEMPLATES
            .iter()
            .map(|t| {
                let q = format!("{t} tea");
                (q.clone(), vec![format!("{q} a"), format!("{q} b"), format!("{q} c")])
            })
            .collect();
        let source = StubSuggestions {
            responses: pairs.into_iter().collect(),
            failing: false,
        };
        let questions = source.questions("tea").await;
        assert_eq!(questions.len(), MAX_QUESTIONS);
        assert_eq!(questions[0], "what is tea a");
        assert_eq!(questions[9], "where to tea b");
    }

    #[tokio::test]
    async fn test_questions_empty_when_source_fails() {
        assert!(StubSuggestions::failing().questions("tea").await.is_empty());
    }
}
