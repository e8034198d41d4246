//! Resolution of radar entries from tagged notes.
//!
//! Each quadrant of a radar block names the tags whose notes belong in it.
//! [`enrich`] walks the quadrants in order, asks a [`TagIndex`] for the notes
//! carrying each tag, and turns every matching note into a [`RadarEntry`].

use log::{debug, trace};

use techradar_core::{
    document::Document,
    entry::{EntryDefaults, RadarEntry},
    radar::RadarConfig,
};

/// A source of notes that can be looked up by tag.
///
/// Implementations may return a superset of the notes that declare the tag in
/// their frontmatter, for example notes that only mention it inline or carry a
/// nested `tag/child`. [`enrich`] keeps only exact frontmatter matches.
pub trait TagIndex {
    /// Returns every document carrying `tag`.
    fn documents_with_tag(&self, tag: &str) -> Vec<&Document>;
}

impl<T: TagIndex + ?Sized> TagIndex for &T {
    fn documents_with_tag(&self, tag: &str) -> Vec<&Document> {
        (**self).documents_with_tag(tag)
    }
}

impl TagIndex for [Document] {
    fn documents_with_tag(&self, tag: &str) -> Vec<&Document> {
        self.iter()
            .filter(|doc| doc.frontmatter().has_tag(tag))
            .collect()
    }
}

impl TagIndex for Vec<Document> {
    fn documents_with_tag(&self, tag: &str) -> Vec<&Document> {
        self.as_slice().documents_with_tag(tag)
    }
}

/// Resolve the entries of a radar block.
///
/// Entries are ordered by quadrant, then by tag within the quadrant, then by
/// the order the index returns notes in. Quadrants without tags contribute
/// nothing but keep their position, so later quadrants keep their ids. A note
/// matching several tags of the same quadrant appears once per tag.
pub fn enrich(
    config: &RadarConfig,
    index: &dyn TagIndex,
    defaults: &EntryDefaults,
) -> Vec<RadarEntry> {
    let quadrant_count = config.quadrants().len();
    let mut entries = Vec::new();

    for (id, spec) in config.quadrants().iter().enumerate() {
        let Some(quadrant) = spec.resolve(id) else {
            debug!(quadrant = id; "Quadrant has no tags, skipping");
            continue;
        };

        for tag in quadrant.tags() {
            let found = index.documents_with_tag(tag);
            trace!(tag, found = found.len(); "Queried tag index");

            let before = entries.len();
            entries.extend(
                found
                    .into_iter()
                    .filter(|doc| doc.frontmatter().has_tag(tag))
                    .map(|doc| defaults.resolve(doc, &quadrant, quadrant_count)),
            );
            debug!(
                quadrant = id,
                tag,
                entries = entries.len() - before;
                "Resolved entries for tag"
            );
        }
    }

    debug!(entries = entries.len(); "Calculated radar entries");
    entries
}
