//! Parser for tech radar blocks.
//!
//! This crate turns the text of a `tech-radar` fenced block into a
//! [`RadarConfig`], finds those blocks in markdown notes, and reads the
//! frontmatter notes use to place themselves on a radar.
//!
//! # Example
//!
//! ```
//! let note = "# Radar\n\n```tech-radar\nquadrants:\n  - name: Tools\n    tags: [adopt]\n```\n";
//!
//! let blocks = techradar_parser::extract_blocks(note);
//! let config = techradar_parser::parse(blocks[0].source()).expect("valid block");
//! assert_eq!(config.quadrants().len(), 1);
//! ```

pub mod error;

mod frontmatter;
mod markdown;
mod span;
mod yaml;

pub use frontmatter::{SplitNote, note_frontmatter, parse_frontmatter, split_frontmatter};
pub use markdown::{CodeBlock, RADAR_LANGUAGE, extract_blocks, extract_blocks_with_language};
pub use span::Span;

use log::info;

use techradar_core::radar::RadarConfig;

use error::{Diagnostic, ParseError};

/// Parse the text of a `tech-radar` block.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is not valid YAML, is empty, lacks
/// `quadrants`, or does not have the expected structure.
pub fn parse(source: &str) -> Result<RadarConfig, ParseError> {
    info!(bytes = source.len(); "Parsing radar block");
    yaml::parse_radar(source)
}

/// Parse the text of a `tech-radar` block, keeping warnings.
///
/// Warnings flag keys that parse but are replaced when rendering, such as
/// `svg`. They never stop the block from rendering.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_with_warnings(source: &str) -> Result<(RadarConfig, Vec<Diagnostic>), ParseError> {
    info!(bytes = source.len(); "Parsing radar block");
    yaml::parse_radar_with_warnings(source)
}
