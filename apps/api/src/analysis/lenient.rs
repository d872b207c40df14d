//! `deserialize_with` helpers for enrichment fields.
//!
//! Enrichment arrives from callers and from model replies and is often only
//! partly well formed. Each helper reads the raw JSON value and maps `null`
//! or a wrong type to "absent" instead of failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::analysis::models::{CompetitionTier, NarrativeInsights};

/// String, or `None` for anything else.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// The string entries of an array. Non-string entries are skipped; a
/// non-array value gives an empty list.
pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(strings_of(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`string_list`], but a non-array value is `None`.
pub fn optional_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(strings_of(Value::deserialize(deserializer)?))
}

/// Whole number; fractional numbers are truncated, anything else is `None`.
pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    }))
}

/// Competition label, matched case-insensitively. Unknown labels are `None`.
pub fn competition<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CompetitionTier>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(label) => CompetitionTier::from_label(&label),
        _ => None,
    })
}

/// Narrative object with lenient fields; a non-object value is `None`.
pub fn narrative<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NarrativeInsights>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn strings_of(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}
