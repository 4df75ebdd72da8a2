//! Backtracking cursor over a token stream.
//!
//! The cursor only ever rests on significant tokens: horizontal whitespace and comments are skipped at
//! construction and after every advance. The raw tokens stay in the stream so callers can still ask whether
//! whitespace preceded the current token, or re-join free text verbatim.
//!
//! Speculative parsing uses an explicit stack of save points. Every [`TokenIterator::push_save_point`] must be
//! paired with exactly one [`TokenIterator::drop_save_point`] or [`TokenIterator::rollback`] before the caller
//! that pushed it returns.

use crate::diagnostics::ParseError;
use crate::lexer::{self, Token, TokenKind};

/// Cursor over a lexed token stream with save-point based backtracking.
#[derive(Debug, Clone)]
pub struct TokenIterator {
    tokens: Vec<Token>,
    index: usize,
    save_points: Vec<usize>,
}

impl TokenIterator {
    /// Create a cursor over `tokens`.
    ///
    /// A stream that does not end with [`TokenKind::End`] gets one appended, so the cursor always has a
    /// resting place past the last significant token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::End) {
            let offset = tokens.last().map_or(0, |t| t.offset + t.value.len());
            tokens.push(Token::new(TokenKind::End, "", offset));
        }
        let mut iter = Self {
            tokens,
            index: 0,
            save_points: Vec::new(),
        };
        iter.skip_trivia();
        iter
    }

    /// Tokenize `source` and wrap the result.
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        lexer::tokenize(source).map(Self::new)
    }

    fn skip_trivia(&mut self) {
        while self.tokens[self.index].kind.is_trivia() {
            self.index += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.tokens[self.index].kind == TokenKind::End
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.index]
    }

    pub fn current_token_type(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn current_token_value(&self) -> &str {
        &self.current_token().value
    }

    pub fn current_token_offset(&self) -> usize {
        self.current_token().offset
    }

    pub fn is_current_token_type(&self, kind: TokenKind) -> bool {
        self.current_token_type() == kind
    }

    pub fn is_current_token_value(&self, value: &str) -> bool {
        self.current_token_value() == value
    }

    /// Return `true` if the raw token right before the cursor is horizontal whitespace.
    ///
    /// This is what separates `array{...}` (a shape) from `array {...}`.
    pub fn is_preceded_by_horizontal_whitespace(&self) -> bool {
        self.index > 0 && self.tokens[self.index - 1].kind == TokenKind::HorizontalWhitespace
    }

    // ========================================================================
    // Consumption
    // ========================================================================

    /// Advance to the next significant token. At the end of the stream this is a no-op.
    pub fn next(&mut self) {
        if !self.is_at_end() {
            self.index += 1;
        }
        self.skip_trivia();
    }

    /// Consume the current token if it has the given kind.
    pub fn try_consume_token_type(&mut self, kind: TokenKind) -> bool {
        if self.is_current_token_type(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consume the current token if its text is exactly `value`.
    pub fn try_consume_token_value(&mut self, value: &str) -> bool {
        if self.is_current_token_value(value) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consume the current token, failing if it does not have the given kind.
    ///
    /// ## Errors
    /// [`ParseError::UnexpectedToken`] naming `kind` as the expectation and the current token as found.
    pub fn consume_token_type(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.try_consume_token_type(kind) {
            Ok(())
        } else {
            Err(ParseError::unexpected(self.current_token(), Some(kind)))
        }
    }

    /// Concatenate raw token text from the cursor until a token of one of `kinds` or the end of the stream.
    ///
    /// Whitespace and comments are included verbatim. The cursor is left on the stopping token.
    pub fn join_until(&mut self, kinds: &[TokenKind]) -> String {
        let mut text = String::new();
        loop {
            let token = &self.tokens[self.index];
            if token.kind == TokenKind::End || kinds.contains(&token.kind) {
                break;
            }
            text.push_str(&token.value);
            self.index += 1;
        }
        text
    }

    // ========================================================================
    // Save points
    // ========================================================================

    /// Record the current position so a speculative parse can be undone.
    pub fn push_save_point(&mut self) {
        self.save_points.push(self.index);
    }

    /// Forget the most recent save point, keeping the current position.
    pub fn drop_save_point(&mut self) {
        self.save_points
            .pop()
            .expect("INVARIANT: drop_save_point without a matching push_save_point");
    }

    /// Return to the most recent save point and forget it.
    pub fn rollback(&mut self) {
        self.index = self
            .save_points
            .pop()
            .expect("INVARIANT: rollback without a matching push_save_point");
    }

    /// Number of outstanding save points.
    pub fn save_point_depth(&self) -> usize {
        self.save_points.len()
    }
}
