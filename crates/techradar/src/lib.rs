//! Tech Radar - radar visualizations for markdown notes.
//!
//! A note embeds a `tech-radar` fenced block describing quadrants by tag.
//! This crate parses the block, resolves its entries from the notes carrying
//! those tags, and hands the result to the `radar_visualization` script
//! through a [`RenderSurface`](surface::RenderSurface).

pub mod config;
pub mod enrich;
pub mod session;
pub mod settings;
pub mod surface;
pub mod vault;
pub mod view;

mod error;

pub use techradar_core::{document, entry, frontmatter, quadrant, radar};

pub use error::TechRadarError;

use log::{debug, info, trace, warn};

use techradar_core::{entry::RadarEntry, radar::RadarConfig, radar::RadarPayload};
use techradar_parser::error::Diagnostic;

use config::AppConfig;
use enrich::TagIndex;
use session::{EvictionPolicy, RadarSession};
use surface::{FULL_SCALE, RenderSurface, SURFACE_CLASS};

/// The outcome of rendering one radar block.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRadar {
    surface_id: String,
    payload: RadarPayload,
    warnings: Vec<Diagnostic>,
}

impl RenderedRadar {
    /// Id of the drawing surface the radar was rendered into.
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    /// The configuration handed to the visualization routine.
    pub fn payload(&self) -> &RadarPayload {
        &self.payload
    }

    /// Parts of the block that were ignored, pointing into the block text.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// Renderer for `tech-radar` blocks.
///
/// # Examples
///
/// ```rust
/// use techradar::{
///     RadarRenderer, config::AppConfig, document::Document, frontmatter::Frontmatter,
///     surface::HtmlSurface,
/// };
///
/// let notes = vec![Document::new(
///     "Cargo",
///     "tools/Cargo.md",
///     Frontmatter::with_tags(["adopt"]).with_ring(1),
/// )];
/// let renderer = RadarRenderer::new(AppConfig::default(), notes);
///
/// let source = "quadrants:\n  - name: Tools\n    tags: [adopt]\n";
/// let mut surface = HtmlSurface::new();
/// let rendered = renderer
///     .render(source, &mut surface, "42", false)
///     .expect("Failed to render");
///
/// assert_eq!(rendered.surface_id(), "radar42");
/// assert_eq!(rendered.payload().entries().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RadarRenderer<I> {
    config: AppConfig,
    index: I,
}

impl<I: TagIndex> RadarRenderer<I> {
    /// Create a new renderer.
    ///
    /// # Arguments
    ///
    /// * `config` - Render and entry-default settings.
    /// * `index` - Where notes are looked up by tag.
    pub fn new(config: AppConfig, index: I) -> Self {
        Self { config, index }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Parse the text of a radar block.
    ///
    /// # Errors
    ///
    /// Returns `TechRadarError::Parse` carrying `source` for malformed
    /// blocks.
    pub fn parse(&self, source: &str) -> Result<RadarConfig, TechRadarError> {
        techradar_parser::parse(source).map_err(|err| TechRadarError::new_parse_error(err, source))
    }

    /// Resolve the entries of a parsed radar block.
    pub fn enrich(&self, config: &RadarConfig) -> Vec<RadarEntry> {
        enrich::enrich(config, &self.index, self.config.entries())
    }

    /// Render a radar block into `surface`.
    ///
    /// The block is parsed and enriched, then a drawing surface with id
    /// `radar<doc_id>` is created and a script calling the visualization
    /// routine with the populated configuration is embedded after it.
    ///
    /// # Arguments
    ///
    /// * `source` - Text of the radar block.
    /// * `surface` - Where to draw.
    /// * `doc_id` - Id of the block, unique among radars shown together.
    /// * `thumbnail` - Render at the thumbnail scale instead of full size.
    ///
    /// # Errors
    ///
    /// Returns `TechRadarError::Parse` for malformed blocks and
    /// `TechRadarError::Serialize` if the payload cannot be serialized.
    /// Nothing is added to `surface` on error. Warnings do not fail the
    /// render; they are logged and kept in [`RenderedRadar::warnings`].
    pub fn render(
        &self,
        source: &str,
        surface: &mut dyn RenderSurface,
        doc_id: &str,
        thumbnail: bool,
    ) -> Result<RenderedRadar, TechRadarError> {
        info!(doc_id, thumbnail; "Rendering radar");

        let (config, warnings) = techradar_parser::parse_with_warnings(source)
            .map_err(|err| TechRadarError::new_parse_error(err, source))?;
        for warning in &warnings {
            warn!(
                doc_id,
                kind = warning.code().map_or("warning", |code| code.description());
                "{warning}"
            );
        }
        let entries = self.enrich(&config);

        let surface_id = surface::surface_id(doc_id);
        let scale = if thumbnail {
            self.config.render().thumbnail_scale()
        } else {
            FULL_SCALE
        };
        let payload = config.into_payload(entries, surface_id.as_str(), scale, doc_id);
        trace!(payload:?; "Radar payload");

        let script =
            surface::visualization_script(self.config.render().visualization_function(), &payload)?;

        surface.create_drawing_surface(&surface_id, SURFACE_CLASS);
        surface.embed_script(&script);

        debug!(surface_id = surface_id.as_str(), entries = payload.entries().len(); "Radar rendered");
        Ok(RenderedRadar {
            surface_id,
            payload,
            warnings,
        })
    }

    /// Handle a `tech-radar` block found in a note.
    ///
    /// The source is remembered in `session` so a click can expand it, then
    /// rendered as a thumbnail.
    ///
    /// # Errors
    ///
    /// Same as [`RadarRenderer::render`]. The source is cached even when it
    /// fails to render.
    pub fn process_code_block<P: EvictionPolicy>(
        &self,
        session: &mut RadarSession<P>,
        source: &str,
        surface: &mut dyn RenderSurface,
        doc_id: &str,
    ) -> Result<RenderedRadar, TechRadarError> {
        session.remember(doc_id, source);
        self.render(source, surface, doc_id, true)
    }
}
