//! Rendering surfaces and the script that drives the visualization.
//!
//! The renderer never touches a page directly. It asks a [`RenderSurface`] to
//! create a drawing element and to embed a script fragment calling the
//! visualization routine; [`HtmlSurface`] is the implementation that writes
//! HTML markup.

use svg::Document as SvgDocument;

use techradar_core::radar::RadarPayload;

/// Prefix of every drawing surface id.
pub const SURFACE_PREFIX: &str = "radar";

/// CSS class of every drawing surface.
pub const SURFACE_CLASS: &str = "tech-radar-svg";

/// Scale used for full-size renders.
pub const FULL_SCALE: f64 = 1.0;

/// Derives the drawing surface id of a block.
pub fn surface_id(doc_id: &str) -> String {
    format!("{SURFACE_PREFIX}{doc_id}")
}

/// Recovers the block id from a drawing surface id.
///
/// Returns `None` for ids that do not carry the surface prefix. The prefix is
/// stripped textually; nothing else about the id is checked.
pub fn doc_id_from_surface(id: &str) -> Option<&str> {
    id.strip_prefix(SURFACE_PREFIX)
}

/// Builds the script fragment calling `function` with the payload.
///
/// The JSON is escaped so it cannot close the enclosing `<script>` element.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized.
pub fn visualization_script(
    function: &str,
    payload: &RadarPayload,
) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(payload)?.replace("</", "<\\/");
    Ok(format!("{function}({json})"))
}

/// A place a radar can be drawn into.
pub trait RenderSurface {
    /// Removes everything previously added to the surface.
    fn clear(&mut self);

    /// Adds a plain text element.
    fn create_text(&mut self, text: &str);

    /// Adds the element the visualization draws into.
    fn create_drawing_surface(&mut self, id: &str, class: &str);

    /// Adds an executable script fragment.
    fn embed_script(&mut self, script: &str);
}

/// A surface that accumulates HTML markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    markup: String,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn into_markup(self) -> String {
        self.markup
    }
}

impl RenderSurface for HtmlSurface {
    fn clear(&mut self) {
        self.markup.clear();
    }

    fn create_text(&mut self, text: &str) {
        self.markup.push_str("<div>");
        self.markup.push_str(&escape_html(text));
        self.markup.push_str("</div>\n");
    }

    fn create_drawing_surface(&mut self, id: &str, class: &str) {
        let element = SvgDocument::new().set("id", id).set("class", class);
        self.markup.push_str(&element.to_string());
        self.markup.push('\n');
    }

    fn embed_script(&mut self, script: &str) {
        self.markup.push_str("<script type=\"text/javascript\">");
        self.markup.push_str(script);
        self.markup.push_str("</script>\n");
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
