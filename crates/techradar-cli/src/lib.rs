//! Tech Radar CLI library
//!
//! Renders every `tech-radar` block of a markdown note into one HTML page,
//! resolving radar entries from the notes of the surrounding vault.

pub mod error_adapter;

mod args;
mod config;
mod page;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info, warn};
use miette::{GraphicalReportHandler, GraphicalTheme};

use techradar::{
    RadarRenderer, TechRadarError,
    session::RadarSession,
    settings::{RadarSettings, SettingsStore},
    surface::HtmlSurface,
    vault::VaultIndex,
};
use techradar_parser::{CodeBlock, error::Diagnostic};

use error_adapter::DiagnosticAdapter;
use page::Section;

/// Run the Tech Radar CLI application
///
/// Reads the input note, indexes the vault, renders each radar block and
/// writes the resulting page to the output file.
///
/// # Errors
///
/// Returns `TechRadarError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Vault indexing errors
/// - Settings errors
/// - Radar block parsing errors
pub fn run(args: &Args) -> Result<(), TechRadarError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing note"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let input = Path::new(&args.input);
    let note = fs::read_to_string(input)?;

    let vault_root = match &args.vault {
        Some(vault) => Path::new(vault),
        None => input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new(".")),
    };
    let index = VaultIndex::scan(vault_root)?;

    let settings = load_settings(args)?;

    let renderer = RadarRenderer::new(app_config, &index);
    let mut session = RadarSession::new();

    let note_name = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Tech Radar".to_string());
    let prefix = page::slug(&note_name);

    let blocks = techradar_parser::extract_blocks(&note);
    info!(blocks = blocks.len(); "Found radar blocks");

    let mut sections = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let doc_id = format!("{prefix}-{}", block.ordinal());
        let mut surface = HtmlSurface::new();

        let result = if args.full_scale {
            renderer.render(block.source(), &mut surface, &doc_id, false)
        } else {
            renderer.process_code_block(&mut session, block.source(), &mut surface, &doc_id)
        };
        let rendered = result.map_err(|err| in_note(err, &note, block))?;
        for report in warning_reports(rendered.warnings(), &note, block) {
            warn!("{report}");
        }

        sections.push(Section {
            doc_id,
            markup: surface.into_markup(),
        });
    }
    debug!(cached = session.len(); "Session after rendering");

    let html = page::render_page(&note_name, &settings.asset_urls(), &sections);
    fs::write(&args.output, html)?;

    info!(output_file = args.output; "HTML exported successfully");

    Ok(())
}

/// Resolves the settings, persisting an `--asset-base` override when a
/// settings file is in use.
fn load_settings(args: &Args) -> Result<RadarSettings, TechRadarError> {
    match &args.settings {
        Some(path) => {
            let mut store = SettingsStore::load(path)?;
            if let Some(asset_base) = &args.asset_base {
                store.set_asset_base(asset_base.as_str())?;
            }
            Ok(store.settings().clone())
        }
        None => Ok(args
            .asset_base
            .as_deref()
            .map(RadarSettings::new)
            .unwrap_or_default()),
    }
}

/// Renders the warnings of `block` against the note, or against the block
/// text when it does not appear verbatim in the note.
fn warning_reports(warnings: &[Diagnostic], note: &str, block: &CodeBlock) -> Vec<String> {
    let verbatim = note.get(block.span().range()) == Some(block.source());
    let reporter = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    warnings
        .iter()
        .map(|warning| {
            let (diag, src) = if verbatim {
                (warning.clone().offset_by(block.span().start()), note)
            } else {
                (warning.clone(), block.source())
            };
            let mut report = String::new();
            match reporter.render_report(&mut report, &DiagnosticAdapter::new(&diag, src)) {
                Ok(()) => report,
                Err(_) => diag.to_string(),
            }
        })
        .collect()
}

/// Points parse diagnostics of `block` into the whole note when the block
/// text appears verbatim there.
fn in_note(err: TechRadarError, note: &str, block: &CodeBlock) -> TechRadarError {
    match err {
        TechRadarError::Parse { err, src }
            if note.get(block.span().range()) == Some(src.as_str()) =>
        {
            TechRadarError::new_parse_error(err.offset_by(block.span().start()), note)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_reports_point_into_note() {
        let note = "# Radar\n\n```tech-radar\nscale: 3\nquadrants: []\n```\n";
        let blocks = techradar_parser::extract_blocks(note);
        let (_, warnings) =
            techradar_parser::parse_with_warnings(blocks[0].source()).expect("valid block");

        let reports = warning_reports(&warnings, note, &blocks[0]);

        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("E202"));
        assert!(reports[0].contains("`scale` is set when rendering"));
        assert!(reports[0].contains("scale: 3"));
        assert!(reports[0].contains("4:1"), "Located on the note's line: {}", reports[0]);
    }

    #[test]
    fn test_warning_reports_in_blockquote_use_block_text() {
        let note = "> ```tech-radar\n> svg: mine\n> quadrants: []\n> ```\n";
        let blocks = techradar_parser::extract_blocks(note);
        let (_, warnings) =
            techradar_parser::parse_with_warnings(blocks[0].source()).expect("valid block");

        let reports = warning_reports(&warnings, note, &blocks[0]);

        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("svg: mine"));
        assert!(!reports[0].contains("> svg"), "Rendered against the block: {}", reports[0]);
    }
}
