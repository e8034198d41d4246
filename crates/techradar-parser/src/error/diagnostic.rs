//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E200]: radar block has no `quadrants`
///  --> radar block:1:1
///   |
/// 1 | title: Engineering Radar
///   | ^^^^^^^^^^^^^^^^^^^^^^^^ quadrants are required
///   |
///   = help: add `quadrants:` with a list of `{name, tags}` entries
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use techradar_parser::error::{Diagnostic, ErrorCode};
    /// # use techradar_parser::Span;
    ///
    /// let diag = Diagnostic::error("radar block has no `quadrants`")
    ///     .with_code(ErrorCode::E200)
    ///     .with_label(Span::new(0..24), "quadrants are required")
    ///     .with_help("add `quadrants:` with a list of `{name, tags}` entries");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Shift every label by `offset` bytes.
    ///
    /// Block diagnostics are produced against the block's own text; this maps
    /// them onto the enclosing note.
    pub fn offset_by(mut self, offset: usize) -> Self {
        self.labels = self
            .labels
            .iter()
            .map(|label| label.offset_by(offset))
            .collect();
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("invalid YAML");

        assert!(diag.severity().is_error());
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("`quadrants` must be a list")
            .with_code(ErrorCode::E201)
            .with_label(Span::new(11..20), "found a string")
            .with_secondary_label(Span::new(0..9), "declared here")
            .with_help("write each quadrant as `- name: ...`");

        assert_eq!(diag.code(), Some(ErrorCode::E201));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("write each quadrant as `- name: ...`"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("radar block is empty").with_code(ErrorCode::E101);
        assert_eq!(diag.to_string(), "error[E101]: radar block is empty");

        let diag = Diagnostic::warning("unknown ring");
        assert_eq!(diag.to_string(), "warning: unknown ring");
    }

    #[test]
    fn test_diagnostic_offset_by() {
        let diag = Diagnostic::error("invalid YAML")
            .with_label(Span::new(3..5), "here")
            .offset_by(10);

        assert_eq!(diag.labels()[0].span().range(), 13..15);
    }
}
