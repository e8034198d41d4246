//! Configuration types for tech radar rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML or any other serde format. Every section and field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and entry settings.
//! - [`RenderConfig`] - Visualization routine name and thumbnail scale.
//! - [`EntryDefaults`] - Values used for frontmatter fields a note leaves out.
//!
//! # Example
//!
//! ```
//! # use techradar::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().visualization_function(), "radar_visualization");
//! assert_eq!(config.entries().ring(), 3);
//! ```

use serde::Deserialize;

pub use techradar_core::entry::EntryDefaults;

/// Name of the global function the embedded script calls.
pub const DEFAULT_VISUALIZATION_FUNCTION: &str = "radar_visualization";

/// Scale applied to radars rendered inline in a note.
pub const DEFAULT_THUMBNAIL_SCALE: f64 = 0.46;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Entry defaults section.
    #[serde(default)]
    entries: EntryDefaults,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, entries: EntryDefaults) -> Self {
        Self { render, entries }
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    pub fn entries(&self) -> &EntryDefaults {
        &self.entries
    }
}

/// How a radar is handed to the visualization routine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Global function called with the radar payload.
    visualization_function: String,

    /// Scale used for inline (thumbnail) renders.
    thumbnail_scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            visualization_function: DEFAULT_VISUALIZATION_FUNCTION.to_string(),
            thumbnail_scale: DEFAULT_THUMBNAIL_SCALE,
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `visualization_function` - Global function the script calls.
    /// * `thumbnail_scale` - Scale used for inline renders.
    pub fn new(visualization_function: impl Into<String>, thumbnail_scale: f64) -> Self {
        Self {
            visualization_function: visualization_function.into(),
            thumbnail_scale,
        }
    }

    pub fn visualization_function(&self) -> &str {
        &self.visualization_function
    }

    pub fn thumbnail_scale(&self) -> f64 {
        self.thumbnail_scale
    }
}
