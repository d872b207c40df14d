use async_trait::async_trait;
use tracing::debug;

use super::prompts::{NARRATIVE_PROMPT_TEMPLATE, NARRATIVE_SYSTEM};
use super::NarrativeSource;
use crate::analysis::models::{CompetitionTier, NarrativeInsights};
use crate::llm_client::{LlmClient, LlmError};

const MAX_MONETIZATION_OPPORTUNITIES: usize = 4;
const MAX_PROMPT_RELATED_TERMS: usize = 10;

/// Context handed to a narrative source.
#[derive(Debug, Clone)]
pub struct NarrativeRequest {
    pub term: String,
    pub difficulty: u32,
    pub competition: CompetitionTier,
    pub related_terms: Vec<String>,
}

impl NarrativeRequest {
    fn to_prompt(&self) -> String {
        let related = if self.related_terms.is_empty() {
            "none".to_string()
        } else {
            self.related_terms
                .iter()
                .take(MAX_PROMPT_RELATED_TERMS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        NARRATIVE_PROMPT_TEMPLATE
            .replace("{term}", &self.term)
            .replace("{difficulty}", &self.difficulty.to_string())
            .replace("{competition}", self.competition.as_str())
            .replace("{related_terms}", &related)
    }
}

/// Narrative insights from a single JSON completion.
pub struct LlmNarrativeSource {
    llm: LlmClient,
}

impl LlmNarrativeSource {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl NarrativeSource for LlmNarrativeSource {
    async fn insights(&self, request: &NarrativeRequest) -> Result<NarrativeInsights, LlmError> {
        let mut insights: NarrativeInsights = self
            .llm
            .call_json(&request.to_prompt(), NARRATIVE_SYSTEM)
            .await?;
        insights
            .monetization_opportunities
            .truncate(MAX_MONETIZATION_OPPORTUNITIES);

        debug!(
            term = %request.term,
            monetization = insights.monetization_opportunities.len(),
            "Narrative insights received"
        );
        Ok(insights)
    }
}

/// Used when no API key is configured. Always returns empty insights.
pub struct DisabledNarrative;

#[async_trait]
impl NarrativeSource for DisabledNarrative {
    async fn insights(&self, _request: &NarrativeRequest) -> Result<NarrativeInsights, LlmError> {
        Ok(NarrativeInsights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(related: Vec<String>) -> NarrativeRequest {
        NarrativeRequest {
            term: "indoor bouldering".to_string(),
            difficulty: 45,
            competition: CompetitionTier::Medium,
            related_terms: related,
        }
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = request(vec!["bouldering gym".to_string()]).to_prompt();
        assert!(prompt.contains(r#"Keyword: "indoor bouldering""#));
        assert!(prompt.contains("difficulty (0-100): 45"));
        assert!(prompt.contains("Competition: Medium"));
        assert!(prompt.contains("Related searches: bouldering gym"));
        assert!(!prompt.contains("{term}"));
        assert!(!prompt.contains("{related_terms}"));
    }

    #[test]
    fn test_prompt_limits_related_terms() {
        let related: Vec<String> = (0..15).map(|i| format!("term{i}")).collect();
        let prompt = request(related).to_prompt();
        assert!(prompt.contains("term9"));
        assert!(!prompt.contains("term10"));
    }

    #[test]
    fn test_prompt_without_related_terms() {
        assert!(request(vec![]).to_prompt().contains("Related searches: none"));
    }

    #[tokio::test]
    async fn test_disabled_narrative_is_empty() {
        let insights = DisabledNarrative.insights(&request(vec![])).await.unwrap();
        assert_eq!(insights, NarrativeInsights::default());
    }
}
