use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{SuggestError, SuggestionSource};

/// Autocomplete-backed suggestion source.
///
/// Sends `GET <endpoint>?client=firefox&q=<term>` and reads the
/// `[query, [suggestion, ...]]` reply.
#[derive(Clone)]
pub struct HttpSuggestionSource {
    client: Client,
    endpoint: String,
}

impl HttpSuggestionSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SuggestError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn suggestions(
        &self,
        term: &str,
        max_results: usize,
    ) -> Result<Vec<String>, SuggestError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("client", "firefox"), ("q", term)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let payload: Value = response.json().await?;
        let suggestions = parse_suggestions(&payload, max_results)?;
        debug!(term, count = suggestions.len(), "Fetched suggestions");
        Ok(suggestions)
    }
}

/// Extracts up to `max_results` strings from a `[query, [s, ...]]` payload.
/// Non-string entries in the list are skipped.
fn parse_suggestions(payload: &Value, max_results: usize) -> Result<Vec<String>, SuggestError> {
    let list = payload
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| SuggestError::Payload("expected [query, [suggestions]]".to_string()))?;

    Ok(list
        .iter()
        .filter_map(Value::as_str)
        .take(max_results)
        .map(str::to_string)
        .collect())
}
