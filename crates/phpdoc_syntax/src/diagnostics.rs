//! Diagnostics for PHPDoc type parsing.
//!
//! A single error enum covers the lexer and the parser. Every variant implements [`miette::Diagnostic`] with a
//! source label, so callers can render it against the original input:
//!
//! ```rust,no_run
//! use phpdoc_syntax::{lexer, parser};
//!
//! let source = "array{";
//! let err = lexer::tokenize(source)
//!     .and_then(|tokens| parser::parse_type(tokens))
//!     .unwrap_err();
//! let report = miette::Report::new(err).with_source_code(source.to_string());
//! eprintln!("{report:?}");
//! ```

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Errors produced while tokenizing or parsing a type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The current token does not fit the grammar at this point.
    #[error("unexpected {found} \"{value}\"{} at offset {offset}", expected_suffix(.expected))]
    #[diagnostic(code(phpdoc::unexpected_token))]
    UnexpectedToken {
        expected: Option<TokenKind>,
        found: TokenKind,
        value: String,
        offset: usize,
        #[label("found here")]
        span: SourceSpan,
    },

    /// The lexer stopped before the end of the input.
    #[error("unexpected '{fragment}' at offset {offset}")]
    #[diagnostic(code(phpdoc::unrecognized_input))]
    UnrecognizedInput {
        fragment: String,
        offset: usize,
        #[label("not a valid token")]
        span: SourceSpan,
    },

    /// Byte input that is not valid UTF-8.
    #[error("invalid UTF-8 sequence at offset {offset}")]
    #[diagnostic(code(phpdoc::invalid_encoding))]
    InvalidEncoding { offset: usize },

    /// Nested type productions exceeded the configured limit.
    #[error("type nesting exceeds the limit of {limit} at offset {offset}")]
    #[diagnostic(code(phpdoc::nesting_too_deep), help("raise `ParserConfig::max_depth` if this input is legitimate"))]
    NestingTooDeep {
        limit: usize,
        offset: usize,
        #[label("too deeply nested")]
        span: SourceSpan,
    },
}

fn expected_suffix(expected: &Option<TokenKind>) -> String {
    match expected {
        Some(kind) => format!(", expected {kind}"),
        None => String::new(),
    }
}

impl ParseError {
    /// Build an [`ParseError::UnexpectedToken`] for `token`.
    pub fn unexpected(token: &Token, expected: Option<TokenKind>) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: token.kind,
            value: token.value.clone(),
            offset: token.offset,
            span: token.span().into(),
        }
    }

    /// Build an [`ParseError::UnrecognizedInput`] for the unmatched tail of `input` starting at `offset`.
    pub fn unrecognized(input: &str, offset: usize) -> Self {
        let tail = &input[offset..];
        let fragment: String = tail.chars().take(40).collect::<String>().replace('\n', "\\n");
        let len = tail.chars().next().map(char::len_utf8).unwrap_or(0);
        ParseError::UnrecognizedInput {
            fragment,
            offset,
            span: Span::new(offset, offset + len).into(),
        }
    }

    /// Build a [`ParseError::NestingTooDeep`] positioned at `token`.
    pub fn nesting_too_deep(limit: usize, token: &Token) -> Self {
        ParseError::NestingTooDeep {
            limit,
            offset: token.offset,
            span: token.span().into(),
        }
    }

    /// Return `true` if a speculative production may recover from this error by rolling back.
    ///
    /// Only grammar mismatches are recoverable; lexer failures and the nesting limit always propagate.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParseError::UnexpectedToken { .. })
    }

    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::UnrecognizedInput { offset, .. }
            | ParseError::InvalidEncoding { offset }
            | ParseError::NestingTooDeep { offset, .. } => *offset,
        }
    }

    /// Kind of the offending token, for [`ParseError::UnexpectedToken`].
    pub fn found_kind(&self) -> Option<TokenKind> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(*found),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phpdoc_core::lang::punctuation::PunctuationId;

    #[test]
    fn test_unexpected_token_message() {
        let token = Token::new(TokenKind::punct(PunctuationId::RBrace), "}", 4);
        let err = ParseError::unexpected(&token, Some(TokenKind::Identifier));
        insta::assert_snapshot!(err.to_string(), @r#"unexpected '}' "}", expected identifier at offset 4"#);
        assert!(err.is_recoverable());
        assert_eq!(err.offset(), 4);
        assert_eq!(err.found_kind(), Some(TokenKind::punct(PunctuationId::RBrace)));
    }

    #[test]
    fn test_unexpected_token_without_expectation() {
        let token = Token::new(TokenKind::End, "", 3);
        let err = ParseError::unexpected(&token, None);
        insta::assert_snapshot!(err.to_string(), @r#"unexpected end of input "" at offset 3"#);
    }

    #[test]
    fn test_unrecognized_fragment_escapes_newlines_and_truncates() {
        let input = format!("int\u{c}\n{}", "x".repeat(60));
        let err = ParseError::unrecognized(&input, 3);
        match &err {
            ParseError::UnrecognizedInput { fragment, offset, .. } => {
                assert_eq!(*offset, 3);
                assert!(fragment.starts_with("\u{c}\\n"));
                assert_eq!(fragment.chars().filter(|c| *c == 'x').count(), 38);
            }
            other => panic!("Expected UnrecognizedInput, got {other:?}"),
        }
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_span_converts_to_source_span() {
        let span: SourceSpan = Span::new(2, 7).into();
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 5);
    }
}
