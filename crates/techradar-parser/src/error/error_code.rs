//! Error codes for radar block diagnostics.
//!
//! - `E1xx` - YAML syntax errors
//! - `E2xx` - Radar structure errors
//! - `E3xx` - Note frontmatter errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Invalid YAML.
    ///
    /// The block is not well-formed YAML.
    E100,

    /// Empty radar block.
    ///
    /// The block contains no YAML document at all.
    E101,

    /// Missing `quadrants` key.
    ///
    /// Every radar block must declare its quadrants.
    E200,

    /// Invalid radar structure.
    ///
    /// The block is valid YAML but does not have the expected shape, for
    /// example a top level that is not a mapping or `quadrants` that is not a
    /// list.
    E201,

    /// Overridden key.
    ///
    /// The block sets a key that rendering always replaces, such as `svg` or
    /// `entries`. This is a warning; the block still renders.
    E202,

    /// Invalid frontmatter.
    ///
    /// A note's frontmatter is not well-formed YAML or is not a mapping.
    E300,
}

impl ErrorCode {
    /// Get a short description of this error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "invalid YAML",
            ErrorCode::E101 => "empty radar block",
            ErrorCode::E200 => "missing quadrants",
            ErrorCode::E201 => "invalid radar structure",
            ErrorCode::E202 => "overridden key",
            ErrorCode::E300 => "invalid frontmatter",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E200.description(), "missing quadrants");
        assert_eq!(ErrorCode::E202.description(), "overridden key");
        assert_eq!(ErrorCode::E300.description(), "invalid frontmatter");
    }
}
