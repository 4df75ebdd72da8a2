//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites.

use crate::lexer::{Token, TokenKind};
use phpdoc_core::lang::keywords::{self, KeywordId};

impl TokenKind {
    /// Return `true` if the token iterator skips this kind between significant tokens.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::HorizontalWhitespace | TokenKind::Comment)
    }
}

impl Token {
    /// Return `true` if this is an identifier spelling the given keyword, ignoring ASCII case.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind == TokenKind::Identifier && keywords::is(&self.value, id)
    }
}
