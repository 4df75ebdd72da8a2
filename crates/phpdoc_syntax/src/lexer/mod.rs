//! Lexer for PHPDoc type expressions.
//!
//! Tokenization is a single anchored regular expression with one alternative per token class, tried in a fixed
//! priority order (see `patterns`). The first alternative that matches at the current offset wins; there is no
//! longest-match rule across alternatives, so the order decides between e.g. a float and an integer.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `patterns` - The ordered pattern table and literal-quoting patterns
//!
//! ## Notes
//! - Carriage returns are stripped before scanning; token offsets refer to the normalized text.
//! - A doc-comment newline token takes a leading `*` but leaves the `*` of a closing `*/`.
//! - The stream always ends with an `End` token whose offset equals the normalized input length.
//! - `&` is emitted as `Reference` when what follows reads like a by-reference parameter (`...`, `,`, `=`, `)`,
//!   `.` or a variable other than `$this`), and as the intersection punctuation otherwise.

mod patterns;
pub mod tokens;

use std::borrow::Cow;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::ParseError;
use patterns::{BARE_LITERAL, SCALAR_LIKE, TOKEN_PATTERN, TokenClass};
use phpdoc_core::lang::keywords::{self, KeywordId};
use phpdoc_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for PHPDoc type text.
pub struct Lexer<'a> {
    source: Cow<'a, str>,
    offset: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        let source = if source.contains('\r') {
            Cow::Owned(source.replace('\r', ""))
        } else {
            Cow::Borrowed(source)
        };
        Self {
            source,
            offset: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Fails with [`ParseError::UnrecognizedInput`] at the first offset where no token pattern matches.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        while self.offset < self.source.len() {
            self.scan_token()?;
        }
        self.tokens.push(Token::new(TokenKind::End, "", self.source.len()));
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), ParseError> {
        let rest = &self.source[self.offset..];
        let Some(captures) = TOKEN_PATTERN.captures(rest) else {
            return Err(ParseError::unrecognized(&self.source, self.offset));
        };
        let Some((group, matched)) = captures
            .iter()
            .enumerate()
            .skip(1)
            .find_map(|(i, m)| m.map(|m| (i, m.as_str())))
        else {
            return Err(ParseError::unrecognized(&self.source, self.offset));
        };

        let class = patterns::class_of_group(group);
        let matched = if class == TokenClass::PhpDocEol {
            trim_comment_close(matched, &rest[matched.len()..])
        } else {
            matched
        };
        let after = &rest[matched.len()..];
        let kind = classify(class, matched, after);
        self.tokens.push(Token::new(kind, matched, self.offset));
        self.offset += matched.len();
        Ok(())
    }
}

fn classify(class: TokenClass, text: &str, after: &str) -> TokenKind {
    match class {
        TokenClass::SingleQuotedString => TokenKind::SingleQuotedString,
        TokenClass::DoubleQuotedString => TokenKind::DoubleQuotedString,
        TokenClass::Variable if is_this_variable(text) => TokenKind::ThisVariable,
        TokenClass::Variable => TokenKind::Variable,
        TokenClass::Float => TokenKind::Float,
        TokenClass::Integer => TokenKind::Integer,
        TokenClass::Identifier => TokenKind::Identifier,
        TokenClass::Punctuation => {
            let id = punctuation::from_str(text).expect("INVARIANT: punctuation row only matches registry spellings");
            if id == PunctuationId::Ampersand && starts_by_reference_target(after) {
                TokenKind::Reference
            } else {
                TokenKind::Punctuation(id)
            }
        }
        TokenClass::Comment => TokenKind::Comment,
        TokenClass::PhpDocEol => TokenKind::PhpDocEol,
        TokenClass::HorizontalWhitespace => TokenKind::HorizontalWhitespace,
        TokenClass::Other => TokenKind::Other,
    }
}

/// A doc-comment newline never takes the `*` of a closing `*/`.
fn trim_comment_close<'s>(matched: &'s str, after: &str) -> &'s str {
    if after.starts_with('/') {
        matched.strip_suffix('*').unwrap_or(matched)
    } else {
        matched
    }
}

fn is_this_variable(text: &str) -> bool {
    text.strip_prefix('$')
        .is_some_and(|name| keywords::is(name, KeywordId::This))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Whether the text after an `&` makes it a by-reference marker.
fn starts_by_reference_target(after: &str) -> bool {
    let after = after.trim_start();
    if after.starts_with(['.', ',', '=', ')']) {
        return true;
    }
    let Some(name) = after.strip_prefix('$') else {
        return false;
    };
    let name_len = name
        .char_indices()
        .find(|(_, c)| !is_name_char(*c))
        .map_or(name.len(), |(i, _)| i);
    let name = &name[..name_len];
    !name.is_empty() && !keywords::is(name, KeywordId::This)
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Tokenize a type expression.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let result = Lexer::new(source).tokenize();
    if let Err(err) = &result {
        tracing::debug!(offset = err.offset(), "tokenization failed");
    }
    result
}

/// Tokenize raw bytes, rejecting input that is not valid UTF-8.
pub fn tokenize_bytes(source: &[u8]) -> Result<Vec<Token>, ParseError> {
    let source = std::str::from_utf8(source).map_err(|e| ParseError::InvalidEncoding {
        offset: e.valid_up_to(),
    })?;
    tokenize(source)
}

/// Return `true` if `value` must be quoted to be read back as the same plain string.
///
/// This holds for control characters, anything that starts like a number, the scalar keywords
/// (`true`, `null`, `yes`, `off`, ...) and anything that is not a bare literal.
pub fn requires_delimiters(value: &str) -> bool {
    SCALAR_LIKE.is_match(value) || keywords::requires_quoting(value) || !BARE_LITERAL.is_match(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn values(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_union_tokens() {
        assert_eq!(
            kinds("int|string"),
            vec![
                TokenKind::Identifier,
                TokenKind::punct(PunctuationId::Pipe),
                TokenKind::Identifier,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_generic_with_whitespace() {
        let tokens = tokenize("array<int, string>").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 5, 6, 9, 10, 11, 17, 18]);
        assert_eq!(tokens[4].kind, TokenKind::HorizontalWhitespace);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::End);
    }

    #[test]
    fn test_empty_input_is_just_end() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::End, "", 0)]);
    }

    #[test]
    fn test_longest_punctuation_wins() {
        assert_eq!(
            kinds("Foo::BAR"),
            vec![
                TokenKind::Identifier,
                TokenKind::punct(PunctuationId::ColonColon),
                TokenKind::Identifier,
                TokenKind::End,
            ]
        );
        assert_eq!(kinds("...")[0], TokenKind::punct(PunctuationId::Ellipsis));
        assert_eq!(kinds("=>")[0], TokenKind::punct(PunctuationId::FatArrow));
    }

    #[test]
    fn test_float_before_integer() {
        assert_eq!(kinds("1.5")[0], TokenKind::Float);
        assert_eq!(kinds("-.5")[0], TokenKind::Float);
        assert_eq!(kinds("1e10")[0], TokenKind::Float);
        assert_eq!(kinds("0x1F")[0], TokenKind::Integer);
        assert_eq!(kinds("-42")[0], TokenKind::Integer);
    }

    #[test]
    fn test_qualified_identifiers() {
        assert_eq!(values(r"\Foo\Bar"), vec![r"\Foo\Bar", ""]);
        assert_eq!(values("non-empty-string"), vec!["non-empty-string", ""]);
    }

    #[test]
    fn test_this_variable_is_case_insensitive() {
        assert_eq!(kinds("$this")[0], TokenKind::ThisVariable);
        assert_eq!(kinds("$THIS")[0], TokenKind::ThisVariable);
        assert_eq!(kinds("$thisOne")[0], TokenKind::Variable);
    }

    #[test]
    fn test_ampersand_reference_or_intersection() {
        assert_eq!(kinds("A&B")[1], TokenKind::punct(PunctuationId::Ampersand));
        assert_eq!(kinds("int &$x")[2], TokenKind::Reference);
        assert_eq!(kinds("int &...$x")[2], TokenKind::Reference);
        assert_eq!(kinds("int&)")[1], TokenKind::Reference);
        assert_eq!(kinds("A & $this")[2], TokenKind::punct(PunctuationId::Ampersand));
    }

    #[test]
    fn test_strings() {
        assert_eq!(kinds("'a\\'b'")[0], TokenKind::SingleQuotedString);
        assert_eq!(kinds("\"x\"")[0], TokenKind::DoubleQuotedString);
        assert_eq!(values("'''\nline\n'''")[0], "'''\nline\n'''");
    }

    #[test]
    fn test_doc_comment_newlines_fold_into_one_token() {
        let tokens = tokenize("int\n * |string").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::PhpDocEol);
        assert_eq!(tokens[1].value, "\n * ");
        assert_eq!(tokens[2].kind, TokenKind::punct(PunctuationId::Pipe));
    }

    #[test]
    fn test_doc_comment_newline_leaves_closing_star() {
        let tokens = tokenize("int\n */").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::PhpDocEol);
        assert_eq!(tokens[1].value, "\n ");
        assert_eq!(tokens[2].kind, TokenKind::punct(PunctuationId::Star));
        assert_eq!(tokens[3].kind, TokenKind::Other);
        assert_eq!(tokens[3].value, "/");

        assert_eq!(values("int\n *\n */"), vec!["int", "\n *\n ", "*", "/", ""]);
        assert_eq!(values("int\n * /"), vec!["int", "\n * ", "/", ""]);
    }

    #[test]
    fn test_carriage_returns_are_stripped() {
        assert_eq!(values("int\r\n|string"), vec!["int", "\n", "|", "string", ""]);
    }

    #[test]
    fn test_comment_and_other() {
        assert_eq!(
            kinds("int # note"),
            vec![
                TokenKind::Identifier,
                TokenKind::HorizontalWhitespace,
                TokenKind::Comment,
                TokenKind::End,
            ]
        );
        assert_eq!(
            kinds("</p>"),
            vec![TokenKind::punct(PunctuationId::LAngle), TokenKind::Other, TokenKind::End]
        );
    }

    #[test]
    fn test_unrecognized_input() {
        let err = tokenize("int\u{c}").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedInput { offset: 3, .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = tokenize_bytes(b"int\xff").unwrap_err();
        assert_eq!(err, ParseError::InvalidEncoding { offset: 3 });
    }

    #[test]
    fn test_requires_delimiters() {
        assert!(requires_delimiters("true"));
        assert!(requires_delimiters("Off"));
        assert!(requires_delimiters(""));
        assert!(requires_delimiters("-1"));
        assert!(requires_delimiters(".5"));
        assert!(requires_delimiters("a,b"));
        assert!(requires_delimiters("tab\there"));
        assert!(!requires_delimiters("MyClass"));
        assert!(!requires_delimiters("hello world"));
        assert!(!requires_delimiters("a:b"));
    }
}
