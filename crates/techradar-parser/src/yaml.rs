//! YAML parsing of `tech-radar` blocks.
//!
//! Parsing happens in two steps. The block is first read into an untyped
//! YAML value so syntax errors and structural problems (no mapping, no
//! `quadrants`, `quadrants` not a list) can be reported with a precise
//! location. The value is then converted into a [`RadarConfig`].
//!
//! Keys that rendering always sets (`entries`, `svg`, `scale`, `docId`) are
//! accepted but reported as warnings.

use log::{debug, trace};
use serde_yaml::{Mapping, Value};

use techradar_core::radar::{RESERVED_KEYS, RadarConfig};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

const QUADRANTS_KEY: &str = "quadrants";

/// Parse the text of a `tech-radar` block.
pub(crate) fn parse_radar(source: &str) -> Result<RadarConfig, ParseError> {
    parse_radar_with_warnings(source).map(|(config, _)| config)
}

/// Parse the text of a `tech-radar` block, also returning warnings about
/// parts of it that will be ignored.
pub(crate) fn parse_radar_with_warnings(
    source: &str,
) -> Result<(RadarConfig, Vec<Diagnostic>), ParseError> {
    if is_blank(source) {
        return Err(empty_block(source));
    }

    let value: Value =
        serde_yaml::from_str(source).map_err(|err| syntax_error(source, &err, ErrorCode::E100))?;

    let mapping = match &value {
        Value::Null => return Err(empty_block(source)),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(Diagnostic::error("radar block must be a mapping")
                .with_code(ErrorCode::E201)
                .with_label(whole(source), format!("found {}", kind(other)))
                .into());
        }
    };

    check_quadrants(source, mapping)?;
    let warnings = overridden_keys(source, mapping);

    let config: RadarConfig = serde_yaml::from_value(value).map_err(|err| {
        Diagnostic::error(format!("invalid radar block: {err}"))
            .with_code(ErrorCode::E201)
            .with_label(key_span(source, QUADRANTS_KEY), "while reading quadrants")
    })?;

    debug!(
        quadrants = config.quadrants().len(),
        warnings = warnings.len();
        "Radar block parsed"
    );
    trace!(config:?; "Parsed radar block");

    Ok((config, warnings))
}

/// Map a `serde_yaml` error onto a diagnostic pointing at its location.
pub(crate) fn syntax_error(source: &str, err: &serde_yaml::Error, code: ErrorCode) -> ParseError {
    let span = match err.location() {
        Some(location) => {
            let start = location.index().min(source.len());
            Span::new(start..(start + 1).min(source.len()))
        }
        None => whole(source),
    };

    Diagnostic::error(format!("invalid YAML: {err}"))
        .with_code(code)
        .with_label(span, "here")
        .into()
}

fn check_quadrants(source: &str, mapping: &Mapping) -> Result<(), ParseError> {
    match mapping.get(QUADRANTS_KEY) {
        Some(Value::Sequence(_)) => Ok(()),
        None => Err(Diagnostic::error("radar block has no `quadrants`")
            .with_code(ErrorCode::E200)
            .with_label(whole(source), "quadrants are required")
            .with_help("add `quadrants:` with a list of `{name, tags}` entries")
            .into()),
        Some(other) => {
            let key = key_span(source, QUADRANTS_KEY);
            let found = format!("found {}", kind(other));
            let diag = match value_span(source, key) {
                Some(value) => Diagnostic::error("`quadrants` must be a list")
                    .with_label(value, found)
                    .with_secondary_label(key, "declared here"),
                None => Diagnostic::error("`quadrants` must be a list").with_label(key, found),
            };
            Err(diag
                .with_code(ErrorCode::E201)
                .with_help("write each quadrant as `- name: ...` on its own line")
                .into())
        }
    }
}

fn overridden_keys(source: &str, mapping: &Mapping) -> Vec<Diagnostic> {
    RESERVED_KEYS
        .iter()
        .filter(|key| mapping.contains_key(**key))
        .map(|key| {
            Diagnostic::warning(format!("`{key}` is set when rendering"))
                .with_code(ErrorCode::E202)
                .with_label(key_span(source, key), "this value is ignored")
                .with_help(format!("remove `{key}` from the block"))
        })
        .collect()
}

/// Returns `true` if the block holds nothing but blank lines and comments.
fn is_blank(source: &str) -> bool {
    source.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn empty_block(source: &str) -> ParseError {
    Diagnostic::error("radar block is empty")
        .with_code(ErrorCode::E101)
        .with_label(whole(source), "no YAML document here")
        .with_help("declare at least `quadrants:`")
        .into()
}

fn whole(source: &str) -> Span {
    Span::new(0..source.len())
}

/// Locate a top-level `key:` line, falling back to the whole source.
fn key_span(source: &str, key: &str) -> Span {
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_prefix(key))
            .and_then(|rest| rest.strip_prefix('"'))
            .or_else(|| trimmed.strip_prefix(key));
        if unquoted.is_some_and(|rest| rest.trim_start().starts_with(':')) {
            let start = offset + (line.len() - trimmed.len());
            return Span::new(start..start + key.len());
        }
        offset += line.len();
    }
    whole(source)
}

/// The rest of the line after the `:` following `key`, if anything is
/// written there.
fn value_span(source: &str, key: Span) -> Option<Span> {
    let rest = source.get(key.end()..)?;
    let line = rest.split('\n').next().unwrap_or(rest);
    let colon = line.find(':')?;
    let after = &line[colon + 1..];
    let value = after.trim();
    if value.is_empty() || value.starts_with('#') {
        return None;
    }

    let start = key.end() + colon + 1 + (after.len() - after.trim_start().len());
    Some(Span::new(start..start + value.len()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
