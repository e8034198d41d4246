//! Indexed notes as seen by the tag-query capability.

use serde::Serialize;

use crate::frontmatter::Frontmatter;

/// A note returned by a tag query.
///
/// `name` becomes the entry label and `path` the entry link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    name: String,
    path: String,
    frontmatter: Frontmatter,
}

impl Document {
    /// Creates a new document.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the note, usually its file stem.
    /// * `path` - Vault-relative path of the note.
    /// * `frontmatter` - Parsed radar fields of the note.
    pub fn new(name: impl Into<String>, path: impl Into<String>, frontmatter: Frontmatter) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            frontmatter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn frontmatter(&self) -> &Frontmatter {
        &self.frontmatter
    }
}
