//! The expanded, full-size radar view.
//!
//! Clicking an inline radar opens its source in a single secondary view,
//! created on first use and reused afterwards. The view persists one piece of
//! state, the radar source it shows, so it can be restored with the host's
//! layout.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    RadarRenderer, RenderedRadar, TechRadarError, enrich::TagIndex, surface::RenderSurface,
};

/// View type identifier registered with the host.
pub const VIEW_TYPE: &str = "tech-radar-view";

/// Block id used for the expanded render.
pub const EXPANDED_DOC_ID: &str = "1";

/// Something that can show a radar source in the expanded view.
pub trait ViewHost {
    /// Shows `source` in the expanded view, opening it if needed.
    fn show_expanded(&mut self, source: &str);
}

/// Persisted state of a [`RadarView`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarViewState {
    #[serde(rename = "techRadarContent", default)]
    pub tech_radar_content: String,
}

/// Result of restoring a [`RadarViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStateResult {
    /// `true` if the state carried content and replaced the view's source.
    pub applied: bool,
}

/// The expanded radar view.
#[derive(Debug, Clone, Default)]
pub struct RadarView {
    content: String,
    layout_save_requested: bool,
}

impl RadarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_type(&self) -> &'static str {
        VIEW_TYPE
    }

    pub fn display_text(&self) -> &'static str {
        "Tech Radar"
    }

    /// The radar source currently shown.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the state to persist.
    pub fn state(&self) -> RadarViewState {
        RadarViewState {
            tech_radar_content: self.content.clone(),
        }
    }

    /// Restores persisted state.
    ///
    /// Empty content leaves the current source in place.
    pub fn set_state(&mut self, state: RadarViewState) -> ViewStateResult {
        if state.tech_radar_content.is_empty() {
            debug!("Ignoring empty view state");
            return ViewStateResult { applied: false };
        }

        self.content = state.tech_radar_content;
        ViewStateResult { applied: true }
    }

    /// Replaces the source shown and asks the host to save its layout.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.layout_save_requested = true;
    }

    /// Returns whether a layout save was requested, clearing the request.
    pub fn take_layout_save_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_save_requested)
    }

    /// Draws the view into `surface`.
    ///
    /// An empty view shows a placeholder; otherwise the source is rendered at
    /// full scale under [`EXPANDED_DOC_ID`].
    ///
    /// # Errors
    ///
    /// Returns the render error if the source does not parse.
    pub fn display<I: TagIndex>(
        &self,
        renderer: &RadarRenderer<I>,
        surface: &mut dyn RenderSurface,
    ) -> Result<Option<RenderedRadar>, TechRadarError> {
        surface.clear();
        debug!(bytes = self.content.len(); "Displaying expanded view");

        if self.content.is_empty() {
            surface.create_text("No content");
            return Ok(None);
        }

        let rendered = renderer.render(&self.content, surface, EXPANDED_DOC_ID, false)?;
        info!("Opened expanded view");
        Ok(Some(rendered))
    }

    /// Redraws the view after the host layout changed.
    ///
    /// # Errors
    ///
    /// Returns the render error if the source does not parse.
    pub fn on_layout_change<I: TagIndex>(
        &self,
        renderer: &RadarRenderer<I>,
        surface: &mut dyn RenderSurface,
    ) -> Result<Option<RenderedRadar>, TechRadarError> {
        debug!("Layout changed");
        self.display(renderer, surface)
    }
}

/// A host holding at most one expanded view.
#[derive(Debug, Clone, Default)]
pub struct RadarWorkspace {
    view: Option<RadarView>,
}

impl RadarWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a workspace whose expanded view was open with `state`.
    pub fn restore(state: RadarViewState) -> Self {
        let mut view = RadarView::new();
        view.set_state(state);
        Self { view: Some(view) }
    }

    pub fn view(&self) -> Option<&RadarView> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut RadarView> {
        self.view.as_mut()
    }
}

impl ViewHost for RadarWorkspace {
    fn show_expanded(&mut self, source: &str) {
        if self.view.is_some() {
            debug!("Reusing expanded view");
        } else {
            debug!("Creating expanded view");
        }
        self.view
            .get_or_insert_with(RadarView::new)
            .set_content(source);
    }
}
