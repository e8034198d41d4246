//! Frontmatter fields a note can use to place itself on the radar.
//!
//! Every field is optional. Absent fields are filled in by
//! [`EntryDefaults`](crate::entry::EntryDefaults) when the note is turned
//! into a [`RadarEntry`](crate::entry::RadarEntry).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::tags::deserialize_tags;

/// Radar-relevant frontmatter of a note.
///
/// ```yaml
/// ---
/// tags: [adopt, languages]
/// ring: 1
/// quadrant: 2
/// moved: 1
/// ---
/// ```
///
/// Unknown keys are ignored. Numeric fields accept integers or numeric
/// strings; anything else is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, deserialize_with = "deserialize_tags")]
    tags: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_int")]
    ring: Option<i64>,

    #[serde(default, deserialize_with = "lenient_int")]
    quadrant: Option<i64>,

    #[serde(default, deserialize_with = "lenient_int")]
    moved: Option<i64>,
}

impl Frontmatter {
    /// Creates frontmatter carrying only the given tags.
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Sets the ring.
    pub fn with_ring(mut self, ring: i64) -> Self {
        self.ring = Some(ring);
        self
    }

    /// Sets the quadrant override.
    pub fn with_quadrant(mut self, quadrant: i64) -> Self {
        self.quadrant = Some(quadrant);
        self
    }

    /// Sets the moved marker.
    pub fn with_moved(mut self, moved: i64) -> Self {
        self.moved = Some(moved);
        self
    }

    /// Returns the tags declared in the frontmatter, or an empty slice.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Returns `true` if the frontmatter declares exactly this tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    pub fn ring(&self) -> Option<i64> {
        self.ring
    }

    pub fn quadrant(&self) -> Option<i64> {
        self.quadrant
    }

    pub fn moved(&self) -> Option<i64> {
        self.moved
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str) -> Frontmatter {
        serde_yaml::from_str(yaml).expect("valid frontmatter")
    }

    #[test]
    fn test_all_fields() {
        let fm = from_yaml("tags: [adopt, tools]\nring: 1\nquadrant: 2\nmoved: -1\n");

        assert_eq!(fm.tags(), ["adopt", "tools"]);
        assert_eq!(fm.ring(), Some(1));
        assert_eq!(fm.quadrant(), Some(2));
        assert_eq!(fm.moved(), Some(-1));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let fm = from_yaml("title: Rust\n");

        assert!(fm.tags().is_empty());
        assert_eq!(fm.ring(), None);
        assert_eq!(fm.quadrant(), None);
        assert_eq!(fm.moved(), None);
    }

    #[test]
    fn test_string_tags_and_numeric_strings() {
        let fm = from_yaml("tags: \"#adopt, trial\"\nring: \"2\"\nmoved: often\n");

        assert_eq!(fm.tags(), ["adopt", "trial"]);
        assert_eq!(fm.ring(), Some(2));
        assert_eq!(fm.moved(), None);
    }

    #[test]
    fn test_has_tag_is_exact() {
        let fm = Frontmatter::with_tags(["adopt/now"]);

        assert!(fm.has_tag("adopt/now"));
        assert!(!fm.has_tag("adopt"));
        assert!(!fm.has_tag("Adopt/now"));
    }

    #[test]
    fn test_null_tags() {
        let fm = from_yaml("tags:\nring: 0\n");

        assert!(fm.tags().is_empty());
        assert_eq!(fm.ring(), Some(0));
    }
}
