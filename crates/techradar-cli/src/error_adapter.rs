//! Error adapter for converting TechRadarError to miette diagnostics.
//!
//! Parse errors carry the text their diagnostics point into; each diagnostic
//! is rendered on its own against that text. Other errors are rendered as a
//! plain message with a code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use techradar::TechRadarError;
use techradar_parser::{Span, error::Diagnostic};

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_warning() {
            Some(miette::Severity::Warning)
        } else {
            Some(miette::Severity::Error)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`TechRadarError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a TechRadarError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TechRadarError::Io(_) => "techradar::io",
            TechRadarError::Parse { .. } => return None,
            TechRadarError::Index(_) => "techradar::index",
            TechRadarError::Settings { .. } => "techradar::settings",
            TechRadarError::Serialize(_) => "techradar::serialize",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TechRadarError::Index(_) => "check that the vault directory exists and is readable",
            TechRadarError::Settings { .. } => "fix or delete the settings file to restore defaults",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// An error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`TechRadarError`] into a list of reportable errors.
///
/// A parse error yields one [`Reportable`] per diagnostic; any other error
/// yields exactly one.
pub fn to_reportables(err: &TechRadarError) -> Vec<Reportable<'_>> {
    match err {
        TechRadarError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use techradar_parser::error::{ErrorCode, ParseError};

    use super::*;

    #[test]
    fn test_parse_error_per_diagnostic() {
        let diags = vec![
            Diagnostic::error("quadrants must be a list")
                .with_code(ErrorCode::E201)
                .with_label(Span::new(0..9), "found a string"),
            Diagnostic::warning("unused key")
                .with_code(ErrorCode::E201)
                .with_secondary_label(Span::new(10..15), "here")
                .with_help("remove it"),
        ];
        let err = TechRadarError::new_parse_error(ParseError::from(diags), "quadrants: x\nfoo: 1\n");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "quadrants must be a list");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()),
            Some("E201".to_string())
        );
        assert_eq!(reportables[1].severity(), Some(miette::Severity::Warning));
        assert_eq!(
            reportables[1].help().map(|h| h.to_string()),
            Some("remove it".to_string())
        );
    }

    #[test]
    fn test_labels_keep_primary_flag() {
        let diag = Diagnostic::error("invalid YAML")
            .with_label(Span::new(0..5), "primary")
            .with_secondary_label(Span::new(6..8), "secondary");

        let adapter = DiagnosticAdapter::new(&diag, "title: [x\n");
        let labels: Vec<_> = adapter.labels().expect("labels").collect();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[0].label(), Some("primary"));
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_other_errors_have_codes() {
        let err = TechRadarError::Io(io::Error::other("disk gone"));

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "I/O error: disk gone");
                assert_eq!(
                    e.code().map(|c| c.to_string()),
                    Some("techradar::io".to_string())
                );
                assert!(e.source_code().is_none());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }
}
