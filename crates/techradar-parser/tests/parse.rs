//! Integration tests for parsing radar blocks out of whole notes.

use serde_json::json;

use techradar_parser::{error::ErrorCode, extract_blocks, note_frontmatter, parse};

const NOTE: &str = r##"---
tags: [radar]
---
# Engineering radar

Intro text.

```tech-radar
title: Engineering Radar
quadrants:
  - name: Languages
    tags: [adopt-lang, trial-lang]
  - name: Tools
    tags: "#adopt-tool"
  - name: Platforms
rings:
  - name: ADOPT
  - name: TRIAL
  - name: ASSESS
  - name: HOLD
```

```tech-radar
quadrants: Languages
```
"##;

#[test]
fn test_parse_blocks_from_note() {
    let blocks = extract_blocks(NOTE);
    assert_eq!(blocks.len(), 2);

    let config = parse(blocks[0].source()).expect("first block is valid");
    let quadrants = config.quadrants();

    assert_eq!(quadrants.len(), 3);
    assert_eq!(quadrants[0].tags(), ["adopt-lang", "trial-lang"]);
    assert_eq!(quadrants[1].tags(), ["adopt-tool"]);
    assert!(quadrants[2].tags().is_empty());
    assert!(quadrants[2].resolve(2).is_none());
    assert_eq!(config.get("title"), Some(&json!("Engineering Radar")));
    assert_eq!(config.rings().and_then(|r| r.as_array()).map(Vec::len), Some(4));
}

#[test]
fn test_block_errors_map_onto_note() {
    let blocks = extract_blocks(NOTE);
    let block = &blocks[1];

    let err = parse(block.source())
        .expect_err("quadrants is a string")
        .offset_by(block.span().start());
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E201));
    assert_eq!(&NOTE[diag.labels()[0].span().range()], "quadrants");
}

#[test]
fn test_note_frontmatter_and_body() {
    let (frontmatter, body) = note_frontmatter(NOTE).expect("valid frontmatter");

    assert!(frontmatter.has_tag("radar"));
    assert!(body.starts_with("# Engineering radar"));
}
