use anyhow::{Context, Result};

/// Default autocomplete endpoint used to expand a term into related searches.
pub const DEFAULT_SUGGEST_ENDPOINT: &str = "http://suggestqueries.google.com/complete/search";

/// Application configuration loaded from environment variables.
/// Fails at startup if a supplied value cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Narrative enrichment is disabled when no key is configured.
    pub anthropic_api_key: Option<String>,
    pub suggest_endpoint: String,
    pub suggest_timeout_secs: u64,
    pub batch_max_terms: usize,
    pub batch_concurrency: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            suggest_endpoint: optional_env("SUGGEST_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_SUGGEST_ENDPOINT.to_string()),
            suggest_timeout_secs: parse_env("SUGGEST_TIMEOUT_SECS", 10)?,
            batch_max_terms: parse_env("BATCH_MAX_TERMS", 100)?,
            batch_concurrency: parse_env("BATCH_CONCURRENCY", 8)?,
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns the variable's value, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
