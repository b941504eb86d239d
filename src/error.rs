use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::scanner::token::Span;

/// Recoverable scan errors. The scanner reports each one and keeps going;
/// the malformed lexeme contributes no token.
#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    #[error("Unexpected Character {ch}")]
    #[diagnostic(code(lox::scan::unexpected_character))]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        #[label("not the start of any token")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unterminated Text")]
    #[diagnostic(
        code(lox::scan::unterminated_string),
        help("add a closing '\"' before the end of input")
    )]
    UnterminatedString {
        line: usize,
        #[label("string is never closed")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}

impl ScanError {
    pub fn unexpected_character(ch: char, line: usize, span: Span) -> Self {
        Self::UnexpectedCharacter {
            ch,
            line,
            span: span.into(),
            src: NamedSource::new("input", String::new()),
        }
    }

    pub fn unterminated_string(line: usize, span: Span) -> Self {
        Self::UnterminatedString {
            line,
            span: span.into(),
            src: NamedSource::new("input", String::new()),
        }
    }

    /// Line the diagnostic is reported at.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line, .. } => *line,
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let src = NamedSource::new(name.into(), source.into());
        match self {
            Self::UnexpectedCharacter { ch, line, span, .. } => Self::UnexpectedCharacter {
                ch,
                line,
                span,
                src,
            },
            Self::UnterminatedString { line, span, .. } => {
                Self::UnterminatedString { line, span, src }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_implements_diagnostic() {
        let err = ScanError::unexpected_character('@', 1, Span::new(0, 1));
        let diag: &dyn Diagnostic = &err;
        assert!(diag.code().is_some());
    }

    #[test]
    fn messages_match_reported_text() {
        let unexpected = ScanError::unexpected_character('#', 2, Span::new(4, 1));
        assert_eq!(unexpected.to_string(), "Unexpected Character #");

        let unterminated = ScanError::unterminated_string(3, Span::new(0, 5));
        assert_eq!(unterminated.to_string(), "Unterminated Text");
    }

    fn labels(err: &ScanError) -> Vec<(Option<String>, SourceSpan)> {
        let diag: &dyn Diagnostic = err;
        diag.labels()
            .map(|labels| {
                labels
                    .map(|l| (l.label().map(str::to_string), *l.inner()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn unterminated_label_covers_rest_of_input() {
        let err = ScanError::unterminated_string(7, Span::new(12, 4));
        assert_eq!(err.line(), 7);
        assert_eq!(
            labels(&err),
            vec![(
                Some("string is never closed".to_string()),
                SourceSpan::new(12.into(), 4)
            )]
        );
    }

    #[test]
    fn with_source_keeps_location() {
        let err = ScanError::unexpected_character('$', 1, Span::new(4, 1))
            .with_source_code("test.lox", "var $ = 1;");
        assert!(matches!(
            err,
            ScanError::UnexpectedCharacter { ch: '$', line: 1, .. }
        ));
        assert_eq!(labels(&err)[0].1, SourceSpan::new(4.into(), 1));
        let diag: &dyn Diagnostic = &err;
        assert!(diag.source_code().is_some());
    }
}
