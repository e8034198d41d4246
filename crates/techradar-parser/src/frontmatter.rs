//! Frontmatter extraction from markdown notes.

use serde_yaml::Value;

use techradar_core::frontmatter::Frontmatter;

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
    yaml::syntax_error,
};

/// A note split into its frontmatter and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitNote<'src> {
    /// Raw YAML between the delimiters, if the note has frontmatter.
    pub frontmatter: Option<&'src str>,
    /// Byte offset of the frontmatter YAML within the note.
    pub frontmatter_offset: usize,
    /// The note without its frontmatter.
    pub body: &'src str,
}

fn is_delimiter(line: &str, closing: bool) -> bool {
    let line = line.trim_end_matches(['\n', '\r']).trim_end();
    line == "---" || (closing && line == "...")
}

/// Split a note into frontmatter and body.
///
/// Frontmatter must start on the very first line with `---` and end at the
/// next line holding `---` or `...`. A note whose opening delimiter is never
/// closed has no frontmatter.
pub fn split_frontmatter(note: &str) -> SplitNote<'_> {
    let no_frontmatter = SplitNote {
        frontmatter: None,
        frontmatter_offset: 0,
        body: note,
    };

    let mut lines = note.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return no_frontmatter;
    };
    if !is_delimiter(first, false) {
        return no_frontmatter;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_delimiter(line, true) {
            return SplitNote {
                frontmatter: Some(&note[yaml_start..offset]),
                frontmatter_offset: yaml_start,
                body: &note[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    no_frontmatter
}

/// Parse frontmatter YAML into the radar-relevant fields.
///
/// Empty frontmatter yields the default (all fields absent).
///
/// # Errors
///
/// Returns [`ErrorCode::E300`] diagnostics when the YAML is malformed or is
/// not a mapping.
pub fn parse_frontmatter(yaml: &str) -> Result<Frontmatter, ParseError> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }

    let value: Value =
        serde_yaml::from_str(yaml).map_err(|err| syntax_error(yaml, &err, ErrorCode::E300))?;

    match value {
        Value::Null => Ok(Frontmatter::default()),
        Value::Mapping(_) => serde_yaml::from_value(value).map_err(|err| {
            Diagnostic::error(format!("invalid frontmatter: {err}"))
                .with_code(ErrorCode::E300)
                .with_label(Span::new(0..yaml.len()), "in this frontmatter")
                .into()
        }),
        _ => Err(Diagnostic::error("frontmatter must be a mapping")
            .with_code(ErrorCode::E300)
            .with_label(Span::new(0..yaml.len()), "not a mapping")
            .into()),
    }
}

/// Split a note and parse its frontmatter in one go.
///
/// Diagnostics are offset so they point into `note`.
pub fn note_frontmatter(note: &str) -> Result<(Frontmatter, &str), ParseError> {
    let split = split_frontmatter(note);
    let frontmatter = match split.frontmatter {
        Some(yaml) => {
            parse_frontmatter(yaml).map_err(|err| err.offset_by(split.frontmatter_offset))?
        }
        None => Frontmatter::default(),
    };
    Ok((frontmatter, split.body))
}
