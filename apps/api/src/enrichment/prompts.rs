// Prompt constants for narrative enrichment.
// Reuses the JSON-only fragment from llm_client::prompts.

pub use crate::llm_client::prompts::JSON_ONLY_SYSTEM as NARRATIVE_SYSTEM;

/// Narrative prompt template. Replace `{term}`, `{difficulty}`,
/// `{competition}` and `{related_terms}` before sending.
pub const NARRATIVE_PROMPT_TEMPLATE: &str = r#"You are a content strategist evaluating a search keyword for a new content business.

Keyword: "{term}"
Estimated difficulty (0-100): {difficulty}
Competition: {competition}
Related searches: {related_terms}

Return a JSON object with this EXACT schema (no extra fields):
{
  "target_audience": "One or two sentences describing who searches for this keyword and why.",
  "content_strategy": "One or two sentences describing the content that would win this keyword.",
  "monetization_opportunities": [
    "Short description of one way to earn revenue from this audience"
  ]
}

Rules:
- monetization_opportunities: at most 4 entries, most promising first.
- Be concrete and specific to the keyword. No generic marketing filler.
- If the keyword is ambiguous, pick the most commercially relevant reading."#;
