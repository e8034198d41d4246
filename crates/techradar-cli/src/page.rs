//! HTML page assembly.

use techradar::surface::escape_html;

/// One rendered radar block.
#[derive(Debug, Clone)]
pub(crate) struct Section {
    pub doc_id: String,
    pub markup: String,
}

/// Builds the page holding every radar of a note.
///
/// The visualization scripts are loaded in the head, in order, so each
/// block's embedded call finds the routine defined.
pub(crate) fn render_page(title: &str, asset_urls: &[String], sections: &[Section]) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    for url in asset_urls {
        page.push_str(&format!(
            "<script src=\"{}\"></script>\n",
            escape_html(url)
        ));
    }
    page.push_str("</head>\n<body>\n");

    if sections.is_empty() {
        page.push_str("<p>No tech radar blocks found.</p>\n");
    }
    for section in sections {
        page.push_str(&format!(
            "<section class=\"tech-radar-block\" data-doc-id=\"{}\">\n{}\n</section>\n",
            escape_html(&section.doc_id),
            section.markup
        ));
    }

    page.push_str("</body>\n</html>\n");
    page
}

/// Turns a note name into a doc id prefix: lowercase ASCII alphanumerics
/// joined by single dashes.
pub(crate) fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("note");
    }
    slug
}
