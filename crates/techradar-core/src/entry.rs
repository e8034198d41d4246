//! Radar entries and default resolution.
//!
//! A note becomes a [`RadarEntry`] by reading its frontmatter fields and
//! filling every absent one from [`EntryDefaults`]. The quadrant falls back to
//! the quadrant whose tag matched the note.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{document::Document, quadrant::Quadrant};

/// Ring assigned to entries whose note does not declare one.
pub const DEFAULT_RING: i64 = 3;

/// Moved marker assigned to entries whose note does not declare one.
///
/// Some radars were built with a default of `2`; configure
/// [`EntryDefaults`] to get that back.
pub const DEFAULT_MOVED: i64 = 0;

/// One blip on the radar, in the shape the visualization routine expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarEntry {
    label: String,
    quadrant: usize,
    ring: i64,
    moved: i64,
    link: String,
}

impl RadarEntry {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn quadrant(&self) -> usize {
        self.quadrant
    }

    pub fn ring(&self) -> i64 {
        self.ring
    }

    pub fn moved(&self) -> i64 {
        self.moved
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Values used for frontmatter fields a note leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDefaults {
    ring: i64,
    moved: i64,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            ring: DEFAULT_RING,
            moved: DEFAULT_MOVED,
        }
    }
}

impl EntryDefaults {
    /// Creates defaults with an explicit ring and moved marker.
    pub fn new(ring: i64, moved: i64) -> Self {
        Self { ring, moved }
    }

    pub fn ring(&self) -> i64 {
        self.ring
    }

    pub fn moved(&self) -> i64 {
        self.moved
    }

    /// Builds the entry for `document`, found through a tag of `quadrant`.
    ///
    /// # Arguments
    ///
    /// * `document` - The matching note.
    /// * `quadrant` - The quadrant whose tag matched.
    /// * `quadrant_count` - Number of quadrants in the radar block. A
    ///   frontmatter quadrant outside `0..quadrant_count` is ignored in favour
    ///   of the enclosing quadrant.
    pub fn resolve(
        &self,
        document: &Document,
        quadrant: &Quadrant,
        quadrant_count: usize,
    ) -> RadarEntry {
        let frontmatter = document.frontmatter();

        let quadrant_id = match frontmatter.quadrant() {
            None => quadrant.id(),
            Some(requested) => match usize::try_from(requested) {
                Ok(id) if id < quadrant_count => id,
                _ => {
                    warn!(
                        document = document.path(),
                        requested,
                        fallback = quadrant.id();
                        "Frontmatter quadrant out of range, using enclosing quadrant"
                    );
                    quadrant.id()
                }
            },
        };

        RadarEntry {
            label: document.name().to_string(),
            quadrant: quadrant_id,
            ring: frontmatter.ring().unwrap_or(self.ring),
            moved: frontmatter.moved().unwrap_or(self.moved),
            link: document.path().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{frontmatter::Frontmatter, quadrant::QuadrantSpec};

    fn quadrant(id: usize) -> Quadrant {
        QuadrantSpec::new("Tools", ["adopt"])
            .resolve(id)
            .expect("tagged quadrant")
    }

    #[test]
    fn test_defaults_fill_absent_fields() {
        let doc = Document::new("Rust", "tech/Rust.md", Frontmatter::with_tags(["adopt"]));
        let entry = EntryDefaults::default().resolve(&doc, &quadrant(1), 4);

        assert_eq!(entry.label(), "Rust");
        assert_eq!(entry.link(), "tech/Rust.md");
        assert_eq!(entry.quadrant(), 1);
        assert_eq!(entry.ring(), DEFAULT_RING);
        assert_eq!(entry.moved(), DEFAULT_MOVED);
    }

    #[test]
    fn test_frontmatter_overrides_defaults() {
        let fm = Frontmatter::with_tags(["adopt"])
            .with_ring(0)
            .with_quadrant(2)
            .with_moved(-1);
        let doc = Document::new("Rust", "Rust.md", fm);
        let entry = EntryDefaults::default().resolve(&doc, &quadrant(1), 4);

        assert_eq!(entry.quadrant(), 2);
        assert_eq!(entry.ring(), 0);
        assert_eq!(entry.moved(), -1);
    }

    #[test]
    fn test_out_of_range_quadrant_falls_back() {
        let doc = Document::new(
            "Rust",
            "Rust.md",
            Frontmatter::with_tags(["adopt"]).with_quadrant(9),
        );
        let entry = EntryDefaults::default().resolve(&doc, &quadrant(1), 4);
        assert_eq!(entry.quadrant(), 1);

        let doc = Document::new(
            "Rust",
            "Rust.md",
            Frontmatter::with_tags(["adopt"]).with_quadrant(-1),
        );
        let entry = EntryDefaults::default().resolve(&doc, &quadrant(0), 4);
        assert_eq!(entry.quadrant(), 0);
    }

    #[test]
    fn test_configured_moved_default() {
        let doc = Document::new("Rust", "Rust.md", Frontmatter::with_tags(["adopt"]));
        let entry = EntryDefaults::new(DEFAULT_RING, 2).resolve(&doc, &quadrant(0), 1);

        assert_eq!(entry.moved(), 2);
    }

    #[test]
    fn test_entry_serializes_for_visualization() {
        let doc = Document::new("Rust", "Rust.md", Frontmatter::with_tags(["adopt"]).with_ring(1));
        let entry = EntryDefaults::default().resolve(&doc, &quadrant(0), 1);

        let json = serde_json::to_value(&entry).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "label": "Rust",
                "quadrant": 0,
                "ring": 1,
                "moved": 0,
                "link": "Rust.md",
            })
        );
    }
}
