//! Token types for the PHPDoc type lexer.
//!
//! Symbol tokens use **registry-backed IDs**: `Punctuation(PunctuationId)` carries the exact symbol that was
//! matched, so the parser switches on `(`, `|`, `<` and friends rather than on a generic "punctuation" tag.
//!
//! ## Notes
//! - Kinds carry no payload; the matched text lives in [`Token::value`].
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use phpdoc_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Punctuation (ID-based) ==========
    /// A symbol from the punctuation registry. `|` is union, `&` intersection, `?` nullable.
    Punctuation(PunctuationId),
    /// `&` marking a by-reference callable or `@param` parameter.
    Reference,

    // ========== Names and literals ==========
    Identifier,
    ThisVariable,
    Variable,
    Integer,
    Float,
    SingleQuotedString,
    DoubleQuotedString,

    // ========== Layout ==========
    Comment,
    /// A run of newlines, each with optional indentation and doc-comment `*`.
    PhpDocEol,
    HorizontalWhitespace,

    // ========== Special ==========
    /// Any other run of non-whitespace characters (free text, `</p>`).
    Other,
    /// End of the token stream.
    End,
}

impl TokenKind {
    /// Shorthand for `TokenKind::Punctuation(id)`.
    pub const fn punct(id: PunctuationId) -> Self {
        TokenKind::Punctuation(id)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Reference => f.write_str("'&' (reference)"),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::ThisVariable => f.write_str("'$this'"),
            TokenKind::Variable => f.write_str("variable"),
            TokenKind::Integer => f.write_str("integer"),
            TokenKind::Float => f.write_str("float"),
            TokenKind::SingleQuotedString => f.write_str("single-quoted string"),
            TokenKind::DoubleQuotedString => f.write_str("double-quoted string"),
            TokenKind::Comment => f.write_str("comment"),
            TokenKind::PhpDocEol => f.write_str("end of line"),
            TokenKind::HorizontalWhitespace => f.write_str("whitespace"),
            TokenKind::Other => f.write_str("text"),
            TokenKind::End => f.write_str("end of input"),
        }
    }
}

/// A token with its kind, matched text and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub offset: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            offset,
        }
    }

    /// Source span covered by this token.
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.value.len())
    }
}
