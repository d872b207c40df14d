use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::models::CompetitionTier;
use crate::analysis::pipeline::{ResearchRequest, ResearchResult};
use crate::errors::AppError;
use crate::state::AppState;

const DEFAULT_MAX_SUGGESTIONS: usize = 10;
const MAX_SUGGESTIONS_LIMIT: usize = 50;

fn default_max_results() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

#[derive(Deserialize)]
pub struct TermQuery {
    #[serde(default)]
    pub term: String,
}

#[derive(Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default)]
    pub term: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    pub terms: Vec<String>,
    #[serde(default)]
    pub include_related: bool,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub term: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub term: String,
    pub questions: Vec<String>,
}

#[derive(Serialize)]
pub struct DifficultyResponse {
    pub term: String,
    pub difficulty: u32,
    pub competition: CompetitionTier,
}

fn required_term(term: &str) -> Result<&str, AppError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(AppError::Validation("term must not be empty".to_string()));
    }
    Ok(term)
}

/// POST /api/v1/keywords/research
pub async fn handle_research(
    State(state): State<AppState>,
    Json(req): Json<ResearchRequest>,
) -> Result<Json<ResearchResult>, AppError> {
    let result = state.researcher.research(req).await?;
    Ok(Json(result))
}

/// POST /api/v1/keywords/batch
pub async fn handle_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<Vec<ResearchResult>>, AppError> {
    let results = state
        .researcher
        .research_batch(req.terms, req.include_related)
        .await?;
    Ok(Json(results))
}

/// GET /api/v1/keywords/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionsQuery>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let term = required_term(&params.term)?;
    if params.max_results == 0 || params.max_results > MAX_SUGGESTIONS_LIMIT {
        return Err(AppError::Validation(format!(
            "max_results must be between 1 and {MAX_SUGGESTIONS_LIMIT}"
        )));
    }

    let suggestions = state
        .researcher
        .suggestions()
        .suggestions(term, params.max_results)
        .await
        .map_err(|e| AppError::Upstream(format!("suggestion lookup failed: {e}")))?;

    Ok(Json(SuggestionsResponse {
        term: term.to_string(),
        suggestions,
    }))
}

/// GET /api/v1/keywords/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    Query(params): Query<TermQuery>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let term = required_term(&params.term)?;
    let questions = state.researcher.suggestions().questions(term).await;
    Ok(Json(QuestionsResponse {
        term: term.to_string(),
        questions,
    }))
}

/// GET /api/v1/keywords/difficulty
pub async fn handle_difficulty(
    State(state): State<AppState>,
    Query(params): Query<TermQuery>,
) -> Result<Json<DifficultyResponse>, AppError> {
    let term = required_term(&params.term)?;
    let result = state.researcher.engine().assess(term, None);
    Ok(Json(DifficultyResponse {
        term: term.to_string(),
        difficulty: result.score,
        competition: result.competition_tier,
    }))
}
