//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the radar block.
///
/// The primary label marks where the problem is; secondary labels point at
/// related places, for example the key a bad value belongs to.
///
/// ```text
/// error[E201]: `quadrants` must be a list
///  --> radar block:2:12
///   |
/// 2 | quadrants: Languages
///   | ---------  ^^^^^^^^^ found a string
///   | |
///   | declared here
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }

    /// Returns the same label shifted by `offset` bytes.
    pub fn offset_by(&self, offset: usize) -> Self {
        Self {
            span: self.span.offset_by(offset),
            message: self.message.clone(),
            is_primary: self.is_primary,
        }
    }
}
