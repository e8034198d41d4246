//! Normalization of tag lists as they appear in YAML.
//!
//! Tags may be written as a sequence (`tags: [adopt, trial]`) or as a single
//! string (`tags: adopt, trial` or `tags: "#adopt #trial"`). Both shapes end
//! up as an ordered list of bare tag names.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    One(String),
    Many(Vec<Value>),
}

/// Strip the leading `#` and surrounding whitespace from a tag.
///
/// Returns `None` when nothing is left.
pub(crate) fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim().trim_start_matches('#').trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

/// Split a single tag string on commas and whitespace.
pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(normalize_tag)
        .collect()
}

fn value_to_tag(value: Value) -> Option<String> {
    match value {
        Value::String(s) => normalize_tag(&s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserialize an optional tag list from either a string or a sequence.
pub(crate) fn deserialize_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTags>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        RawTags::One(s) => split_tags(&s),
        RawTags::Many(values) => values.into_iter().filter_map(value_to_tag).collect(),
    }))
}
