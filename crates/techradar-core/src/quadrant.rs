//! Quadrant definitions.
//!
//! A [`QuadrantSpec`] is a quadrant exactly as written in the radar block,
//! including any visualization keys the renderer does not interpret. A
//! [`Quadrant`] is the resolved form used to query documents: it carries the
//! positional id and is only produced for quadrants that declare tags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tags::deserialize_tags;

/// A quadrant as declared in the radar block.
///
/// ```yaml
/// quadrants:
///   - name: Languages
///     tags: [adopt-lang, trial-lang]
///   - name: Platforms
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadrantSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_tags",
        skip_serializing_if = "Option::is_none"
    )]
    tags: Option<Vec<String>>,

    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl QuadrantSpec {
    /// Creates a quadrant spec with a name and tags.
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            tags: Some(tags.into_iter().map(Into::into).collect()),
            extra: IndexMap::new(),
        }
    }

    /// Creates a quadrant spec without tags.
    pub fn untagged(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the declared tags, or an empty slice when the key is absent.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Resolves this spec into a queryable [`Quadrant`] at position `id`.
    ///
    /// Returns `None` when the quadrant declares no tags; such a quadrant
    /// contributes no entries but still occupies its position.
    pub fn resolve(&self, id: usize) -> Option<Quadrant> {
        if self.tags().is_empty() {
            return None;
        }

        Some(Quadrant {
            id,
            name: self.name.clone().unwrap_or_default(),
            tags: self.tags().to_vec(),
        })
    }
}

/// A quadrant resolved for querying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrant {
    id: usize,
    name: String,
    tags: Vec<String>,
}

impl Quadrant {
    /// Positional id of the quadrant within the radar block.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
