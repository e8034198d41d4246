//! A tag index over a directory of markdown notes.
//!
//! [`VaultIndex`] scans every `*.md` file under a root, reads its
//! frontmatter, and indexes the note under its frontmatter tags and any
//! inline `#tags` in its body. Lookups are case-insensitive and a query for
//! `tag` also returns notes carrying a nested `tag/child`, so results are a
//! superset of the notes declaring `tag` in their frontmatter.

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info, warn};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use walkdir::{DirEntry, WalkDir};

use techradar_core::{document::Document, frontmatter::Frontmatter};
use techradar_parser::note_frontmatter;

use crate::{TechRadarError, enrich::TagIndex};

/// Tag index over a vault of markdown notes.
#[derive(Debug, Clone, Default)]
pub struct VaultIndex {
    root: PathBuf,
    documents: Vec<Document>,
    by_tag: IndexMap<String, Vec<usize>>,
}

impl VaultIndex {
    /// Scans `root` recursively and indexes every markdown note.
    ///
    /// Hidden files and directories are skipped. A note that cannot be read
    /// is skipped; one whose frontmatter does not parse is indexed without
    /// frontmatter. Both are logged as warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory tree cannot be walked.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, TechRadarError> {
        let root = root.as_ref();
        info!(root = root.display().to_string(); "Indexing vault");

        let mut index = Self {
            root: root.to_path_buf(),
            ..Self::default()
        };

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }
            index.scan_note(entry.path());
        }

        info!(
            documents = index.documents.len(),
            tags = index.by_tag.len();
            "Vault indexed"
        );
        Ok(index)
    }

    /// Builds an index from documents, using only their frontmatter tags.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut index = Self::default();
        for document in documents {
            index.insert(document, &[]);
        }
        index
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    fn scan_note(&mut self, path: &Path) {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let link = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = link, err:err; "Skipping unreadable note");
                return;
            }
        };

        let (frontmatter, body) = match note_frontmatter(&content) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(path = link, err:err; "Invalid frontmatter, indexing without it");
                (Frontmatter::default(), content.as_str())
            }
        };

        let inline = inline_tags(body);
        debug!(path = link, inline = inline.len(); "Indexed note");
        self.insert(Document::new(name, link, frontmatter), &inline);
    }

    fn insert(&mut self, document: Document, inline_tags: &[String]) {
        let position = self.documents.len();
        let tags = document
            .frontmatter()
            .tags()
            .iter()
            .chain(inline_tags)
            .cloned()
            .collect::<Vec<_>>();

        for tag in tags {
            for key in tag_keys(&tag) {
                let positions = self.by_tag.entry(key).or_default();
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }
        }

        self.documents.push(document);
    }
}

impl TagIndex for VaultIndex {
    fn documents_with_tag(&self, tag: &str) -> Vec<&Document> {
        let key = tag.trim_start_matches('#').to_lowercase();
        self.by_tag
            .get(&key)
            .map(|positions| positions.iter().map(|&i| &self.documents[i]).collect())
            .unwrap_or_default()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Lower-cased keys a tag is found under: itself and every parent.
fn tag_keys(tag: &str) -> Vec<String> {
    let tag = tag.to_lowercase();
    let mut keys: Vec<String> = tag
        .match_indices('/')
        .map(|(i, _)| tag[..i].to_string())
        .filter(|key| !key.is_empty())
        .collect();
    keys.push(tag);
    keys
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '/')
}

/// Inline `#tags` in a note body.
///
/// Code blocks and inline code are skipped. A tag starts with `#` at the
/// beginning of a run of text or after whitespace and must contain at least
/// one non-digit.
fn inline_tags(body: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut text = String::new();
    let mut in_code_block = false;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                collect_tags(&text, &mut tags);
                text.clear();
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(chunk) if !in_code_block => text.push_str(&chunk),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            _ => {
                collect_tags(&text, &mut tags);
                text.clear();
            }
        }
    }
    collect_tags(&text, &mut tags);

    tags
}

fn collect_tags(text: &str, tags: &mut Vec<String>) {
    let mut previous = None;

    for (i, c) in text.char_indices() {
        let at_boundary = previous.is_none_or(char::is_whitespace);
        previous = Some(c);
        if c != '#' || !at_boundary {
            continue;
        }

        let rest = &text[i + 1..];
        let end = rest.find(|c: char| !is_tag_char(c)).unwrap_or(rest.len());
        let tag = rest[..end].trim_end_matches('/');
        if !tag.is_empty() && !tag.chars().all(|c| c.is_ascii_digit()) {
            tags.push(tag.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_inline_tags() {
        let tags = inline_tags("# Heading\nUses #adopt and #lang/rust, not a#b or #2024.\n#trial");

        assert_eq!(tags, ["adopt", "lang/rust", "trial"]);
    }

    #[test]
    fn test_inline_tags_skip_code() {
        let body = "Uses #adopt.\n\n```\n#hold\n```\n\n    #assess indented\n\nSee `#trial` and *#lang*.\n";

        assert_eq!(inline_tags(body), ["adopt", "lang"]);
    }

    #[test]
    fn test_tag_keys_include_parents() {
        assert_eq!(tag_keys("Lang/Rust/Async"), ["lang", "lang/rust", "lang/rust/async"]);
        assert_eq!(tag_keys("adopt"), ["adopt"]);
    }

    #[test]
    fn test_from_documents_lookup() {
        let index = VaultIndex::from_documents([
            Document::new("Cargo", "Cargo.md", Frontmatter::with_tags(["Adopt"])),
            Document::new("Miri", "Miri.md", Frontmatter::with_tags(["adopt/later"])),
            Document::new("Make", "Make.md", Frontmatter::with_tags(["hold"])),
        ]);

        let names: Vec<_> = index
            .documents_with_tag("adopt")
            .into_iter()
            .map(Document::name)
            .collect();

        assert_eq!(names, ["Cargo", "Miri"]);
        assert!(index.documents_with_tag("assess").is_empty());
    }

    #[test]
    fn test_scan_vault() {
        let dir = tempdir().expect("temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("tools")).expect("mkdir");
        fs::create_dir_all(root.join(".obsidian")).expect("mkdir");

        fs::write(
            root.join("tools/Cargo.md"),
            "---\ntags: [adopt]\nring: 1\n---\n# Cargo\n",
        )
        .expect("write note");
        fs::write(root.join("Notes.md"), "Mentions #adopt inline only.\n").expect("write note");
        fs::write(root.join("Broken.md"), "---\ntags: [adopt\n---\n#adopt\n").expect("write note");
        fs::write(root.join(".obsidian/Hidden.md"), "---\ntags: [adopt]\n---\n")
            .expect("write note");
        fs::write(root.join("tools/readme.txt"), "#adopt").expect("write file");

        let index = VaultIndex::scan(root).expect("scannable vault");

        assert_eq!(index.documents().len(), 3);

        let found = index.documents_with_tag("adopt");
        let links: Vec<_> = found.iter().map(|doc| doc.path()).collect();
        assert_eq!(links, ["Broken.md", "Notes.md", "tools/Cargo.md"]);

        let cargo = found[2];
        assert_eq!(cargo.name(), "Cargo");
        assert_eq!(cargo.frontmatter().ring(), Some(1));
        assert!(!found[0].frontmatter().has_tag("adopt"));
    }
}
