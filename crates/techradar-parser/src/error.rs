//! Error and diagnostic system for the radar parser.
//!
//! A [`Diagnostic`] is a single error or warning with an optional
//! [`ErrorCode`], labeled source spans, and help text. Parsing returns a
//! [`ParseError`] wrapping one or more diagnostics so callers can render them
//! against the source they came from.
//!
//! # Example
//!
//! ```
//! # use techradar_parser::error::{Diagnostic, ErrorCode};
//! # use techradar_parser::Span;
//!
//! let diag = Diagnostic::error("`quadrants` must be a list")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(11..20), "found a string")
//!     .with_secondary_label(Span::new(0..9), "declared here");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
