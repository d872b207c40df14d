//! Signal normalizer: turns raw, partially populated inputs into one immutable
//! [`SignalContext`] that every scorer reads.
//!
//! Absent inputs stay absent here. Each scorer decides its own neutral value.

use serde_json::Value;
use tracing::debug;

use crate::analysis::models::{CompetitionTier, NarrativeInsights, TrafficMetrics};

/// Raw inputs as a caller or collaborator hands them over.
#[derive(Debug, Clone, Default)]
pub struct RawSignals {
    pub term: String,
    pub difficulty: Option<i64>,
    pub competition: Option<CompetitionTier>,
    pub related_terms: Vec<String>,
    pub narrative: NarrativeInsights,
    /// Untyped traffic record; malformed fields are dropped, never rejected.
    pub traffic_metrics: Option<Value>,
    pub user_interests: Option<Vec<String>>,
}

/// Canonical per-request input. Fields are private so the context cannot be
/// changed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalContext {
    term: String,
    term_lower: String,
    match_text: String,
    difficulty: Option<i64>,
    competition_label: Option<CompetitionTier>,
    related_terms: Vec<String>,
    narrative: NarrativeInsights,
    traffic_metrics: Option<TrafficMetrics>,
    user_interests: Option<Vec<String>>,
}

impl SignalContext {
    /// Builds the context. Never fails.
    pub fn from_raw(raw: RawSignals) -> Self {
        let term = raw.term.trim().to_string();
        let term_lower = term.to_lowercase();

        let narrative = NarrativeInsights {
            target_audience: non_blank(raw.narrative.target_audience),
            content_strategy: non_blank(raw.narrative.content_strategy),
            monetization_opportunities: raw
                .narrative
                .monetization_opportunities
                .into_iter()
                .filter(|m| !m.trim().is_empty())
                .collect(),
        };

        let auxiliary_parts: Vec<&str> = [&narrative.target_audience, &narrative.content_strategy]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        let auxiliary_text = if auxiliary_parts.is_empty() {
            None
        } else {
            Some(auxiliary_parts.join(" "))
        };

        let match_text = match &auxiliary_text {
            Some(aux) => format!("{term_lower} {}", aux.to_lowercase()),
            None => term_lower.clone(),
        };

        let traffic_metrics = raw
            .traffic_metrics
            .as_ref()
            .and_then(parse_traffic_metrics);

        let user_interests = raw.user_interests.filter(|interests| !interests.is_empty());

        debug!(
            term = %term,
            related = raw.related_terms.len(),
            has_narrative = auxiliary_text.is_some(),
            has_traffic = traffic_metrics.is_some(),
            "Signal context built"
        );

        Self {
            term,
            term_lower,
            match_text,
            difficulty: raw.difficulty,
            competition_label: raw.competition,
            related_terms: raw.related_terms,
            narrative,
            traffic_metrics,
            user_interests,
        }
    }

    /// Shorthand for a context carrying only a term.
    #[cfg(test)]
    pub fn for_term(term: &str) -> Self {
        Self::from_raw(RawSignals {
            term: term.to_string(),
            ..Default::default()
        })
    }

    /// Term as supplied (trimmed), for presentation text.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn term_lower(&self) -> &str {
        &self.term_lower
    }

    /// Lower-cased term followed by any lower-cased narrative text,
    /// space-separated. Lexicon matching runs against this.
    pub fn match_text(&self) -> &str {
        &self.match_text
    }

    pub fn difficulty_override(&self) -> Option<i64> {
        self.difficulty
    }

    pub fn competition_label(&self) -> Option<CompetitionTier> {
        self.competition_label
    }

    pub fn related_terms(&self) -> &[String] {
        &self.related_terms
    }

    pub fn narrative(&self) -> &NarrativeInsights {
        &self.narrative
    }

    pub fn traffic_metrics(&self) -> Option<&TrafficMetrics> {
        self.traffic_metrics.as_ref()
    }

    pub fn user_interests(&self) -> Option<&[String]> {
        self.user_interests.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads a traffic record leniently. Keys may use either the canonical names
/// or the analytics provider's names; wrong types count as missing. Returns
/// `None` when nothing usable is left.
pub fn parse_traffic_metrics(value: &Value) -> Option<TrafficMetrics> {
    let object = value.as_object()?;

    let field = |keys: &[&str]| keys.iter().find_map(|k| object.get(*k)).filter(|v| !v.is_null());

    let organic = field(&["organic_share_pct", "organic_share"])
        .and_then(as_f64)
        .or_else(|| {
            object
                .get("traffic_sources")
                .and_then(|sources| sources.get("organic_search"))
                .and_then(as_f64)
        });

    let metrics = TrafficMetrics {
        rank: field(&["rank", "global_rank"]).and_then(as_u64),
        total_visits: field(&["total_visits", "visits"]).and_then(as_u64),
        bounce_rate_pct: field(&["bounce_rate_pct", "bounce_rate"]).and_then(as_f64),
        organic_share_pct: organic,
    };

    if metrics.is_empty() {
        None
    } else {
        Some(metrics)
    }
}

fn as_u64(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f.trunc() as u64)
    })
}

fn as_f64(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite())
}
