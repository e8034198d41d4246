use std::{fs, path::Path};

use tempfile::tempdir;

use techradar_cli::{Args, run};

const NOTE: &str = "---
tags: [overview]
---
# Engineering radar

```tech-radar
title: Tools
quadrants:
  - name: Tools
    tags: [adopt]
  - name: Languages
```

Some prose.

~~~tech-radar
quadrants:
  - name: Languages
    tags: [lang]
~~~
";

fn write_vault(root: &Path) {
    fs::create_dir_all(root.join("tools")).expect("create dir");
    fs::create_dir_all(root.join(".trash")).expect("create dir");
    fs::write(
        root.join("tools/Cargo.md"),
        "---\ntags: [adopt]\nring: 1\n---\n# Cargo\n",
    )
    .expect("write note");
    fs::write(root.join("Rust.md"), "---\ntags: lang\n---\n").expect("write note");
    fs::write(root.join(".trash/Old.md"), "---\ntags: [adopt]\n---\n").expect("write note");
    fs::write(root.join("Radar.md"), NOTE).expect("write note");
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        vault: None,
        output: output.to_string_lossy().to_string(),
        config: None,
        settings: None,
        asset_base: None,
        full_scale: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_renders_every_block() {
    let dir = tempdir().expect("Failed to create temp directory");
    write_vault(dir.path());
    let output = dir.path().join("out.html");

    run(&args(&dir.path().join("Radar.md"), &output)).expect("Failed to run");

    let html = fs::read_to_string(&output).expect("read output");
    assert!(html.contains("<title>Radar</title>"));
    assert!(html.contains("<script src=\"assets/d3.v4.min.js\"></script>"));
    assert!(html.contains("<script src=\"assets/radar.js\"></script>"));
    assert!(html.contains("id=\"radarradar-0\""));
    assert!(html.contains("id=\"radarradar-1\""));
    assert!(html.contains("class=\"tech-radar-svg\""));
    assert!(html.contains("\"label\":\"Cargo\""));
    assert!(html.contains("\"link\":\"tools/Cargo.md\""));
    assert!(html.contains("\"label\":\"Rust\""));
    assert!(!html.contains("Old"), "Hidden directories are not indexed");
    assert!(html.contains("\"scale\":0.46"));
}

#[test]
fn e2e_full_scale_and_asset_override() {
    let dir = tempdir().expect("Failed to create temp directory");
    write_vault(dir.path());
    let output = dir.path().join("page.html");
    let settings = dir.path().join("settings/data.json");

    let mut args = args(&dir.path().join("Radar.md"), &output);
    args.vault = Some(dir.path().to_string_lossy().to_string());
    args.settings = Some(settings.to_string_lossy().to_string());
    args.asset_base = Some("https://cdn.example.com/radar".to_string());
    args.full_scale = true;

    run(&args).expect("Failed to run");

    let html = fs::read_to_string(&output).expect("read output");
    assert!(html.contains("https://cdn.example.com/radar/d3.v4.min.js"));
    assert!(html.contains("\"scale\":1.0"));

    let saved = fs::read_to_string(&settings).expect("settings saved");
    assert!(saved.contains("\"assetBase\": \"https://cdn.example.com/radar\""));
}

#[test]
fn e2e_malformed_block_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    let note = dir.path().join("Broken.md");
    fs::write(&note, "```tech-radar\ntitle: [unclosed\n```\n").expect("write note");
    let output = dir.path().join("out.html");

    let err = run(&args(&note, &output)).expect_err("malformed block");

    match err {
        techradar::TechRadarError::Parse { src, .. } => {
            assert!(src.starts_with("```tech-radar"), "Diagnostics point into the note");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    let output = dir.path().join("out.html");

    let result = run(&args(&dir.path().join("absent.md"), &output));

    assert!(result.is_err());
}
