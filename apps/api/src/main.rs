mod analysis;
mod config;
mod enrichment;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::engine::{AnalysisEngine, ScoringConfig};
use crate::analysis::pipeline::Researcher;
use crate::config::Config;
use crate::enrichment::{
    DisabledNarrative, HttpSuggestionSource, LlmNarrativeSource, NarrativeSource,
};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Keyword API v{}", env!("CARGO_PKG_VERSION"));

    let engine = Arc::new(AnalysisEngine::new(ScoringConfig::default()));

    let suggestions = HttpSuggestionSource::new(
        config.suggest_endpoint.clone(),
        Duration::from_secs(config.suggest_timeout_secs),
    )
    .context("Failed to build suggestion client")?;
    info!(endpoint = %config.suggest_endpoint, "Suggestion source initialized");

    let narrative: Arc<dyn NarrativeSource> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("Narrative enrichment enabled (model: {})", llm_client::MODEL);
            Arc::new(LlmNarrativeSource::new(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; narrative enrichment disabled");
            Arc::new(DisabledNarrative)
        }
    };

    let researcher = Researcher::new(
        engine,
        Arc::new(suggestions),
        narrative,
        config.batch_max_terms,
        config.batch_concurrency,
    );

    let state = AppState { researcher };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
