//! Radar block configuration and the payload handed to the visualization.
//!
//! [`RadarConfig`] holds what a `tech-radar` block declares. Only
//! `quadrants` is interpreted; every other key (`rings`, `title`, colors,
//! ...) is carried through untouched and in source order. Once entries have
//! been resolved the config is turned into a [`RadarPayload`], which adds the
//! `entries`, `svg`, `scale` and `docId` keys the visualization reads.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{entry::RadarEntry, quadrant::QuadrantSpec};

/// Keys the payload always sets, overriding any value from the block.
pub const RESERVED_KEYS: [&str; 4] = ["entries", "svg", "scale", "docId"];

/// A parsed `tech-radar` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RadarConfig {
    quadrants: Vec<QuadrantSpec>,

    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

impl RadarConfig {
    /// Creates a config from quadrants alone.
    pub fn new(quadrants: Vec<QuadrantSpec>) -> Self {
        Self {
            quadrants,
            extra: IndexMap::new(),
        }
    }

    /// Adds a pass-through visualization key.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Returns the quadrants in declaration order.
    pub fn quadrants(&self) -> &[QuadrantSpec] {
        &self.quadrants
    }

    /// Returns the `rings` key, if the block declares one.
    pub fn rings(&self) -> Option<&Value> {
        self.extra.get("rings")
    }

    /// Returns a pass-through key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Consumes the config and attaches the rendering fields.
    ///
    /// # Arguments
    ///
    /// * `entries` - Resolved radar entries.
    /// * `svg` - Surface identifier the visualization draws into.
    /// * `scale` - Render scale.
    /// * `doc_id` - Id of the block this radar was rendered from.
    pub fn into_payload(
        mut self,
        entries: Vec<RadarEntry>,
        svg: impl Into<String>,
        scale: f64,
        doc_id: impl Into<String>,
    ) -> RadarPayload {
        for key in RESERVED_KEYS {
            if self.extra.shift_remove(key).is_some() {
                debug!(key; "Overriding key declared in radar block");
            }
        }

        RadarPayload {
            quadrants: self.quadrants,
            extra: self.extra,
            entries,
            svg: svg.into(),
            scale,
            doc_id: doc_id.into(),
        }
    }
}

/// The fully populated configuration passed to the visualization routine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPayload {
    quadrants: Vec<QuadrantSpec>,

    #[serde(flatten)]
    extra: IndexMap<String, Value>,

    entries: Vec<RadarEntry>,
    svg: String,
    scale: f64,

    #[serde(rename = "docId")]
    doc_id: String,
}

impl RadarPayload {
    pub fn quadrants(&self) -> &[QuadrantSpec] {
        &self.quadrants
    }

    pub fn entries(&self) -> &[RadarEntry] {
        &self.entries
    }

    /// Surface identifier the visualization renders into.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Returns a pass-through key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
