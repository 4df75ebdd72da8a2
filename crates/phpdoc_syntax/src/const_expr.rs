//! Constant expressions in type position.
//!
//! The type parser does not know this grammar itself; it is handed a [`ConstExprParser`] and defers to it for
//! class constants (`Foo::BAR`), literals (`'foo'`, `42`) and the array literals it then rejects.

use crate::ast::{ConstExpr, ConstExprArrayItem, QuoteStyle, StringLiteral};
use crate::config::DEFAULT_MAX_DEPTH;
use crate::diagnostics::ParseError;
use crate::lexer::TokenKind;
use crate::token_iterator::TokenIterator;
use phpdoc_core::lang::keywords::KeywordId;
use phpdoc_core::lang::punctuation::PunctuationId;

/// Parser for constant expressions, injected into the type parser.
///
/// Implementations must leave the token iterator's save-point stack as they found it, and must bound their own
/// recursion: input nested too deeply fails with [`ParseError::NestingTooDeep`] rather than exhausting the stack.
pub trait ConstExprParser: Send + Sync {
    /// Parse one constant expression at the cursor.
    ///
    /// When `allow_arrays` is false, array literals are rejected with [`ParseError::UnexpectedToken`].
    fn parse(&self, tokens: &mut TokenIterator, allow_arrays: bool) -> Result<ConstExpr, ParseError>;
}

/// PHP constant expressions: scalars, `true`/`false`/`null`, class and global constants, array literals.
///
/// Array literals nest at most `max_depth` levels deep.
#[derive(Debug, Clone, Copy)]
pub struct PhpConstExprParser {
    max_depth: usize,
}

impl Default for PhpConstExprParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl ConstExprParser for PhpConstExprParser {
    fn parse(&self, tokens: &mut TokenIterator, allow_arrays: bool) -> Result<ConstExpr, ParseError> {
        self.parse_at(tokens, allow_arrays, 0)
    }
}

impl PhpConstExprParser {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    fn parse_at(
        &self,
        tokens: &mut TokenIterator,
        allow_arrays: bool,
        depth: usize,
    ) -> Result<ConstExpr, ParseError> {
        let token = tokens.current_token().clone();
        match token.kind {
            TokenKind::Float => {
                tokens.next();
                Ok(ConstExpr::Float(token.value))
            }
            TokenKind::Integer => {
                tokens.next();
                Ok(ConstExpr::Integer(token.value))
            }
            TokenKind::SingleQuotedString => {
                tokens.next();
                Ok(ConstExpr::String(StringLiteral::from_token_value(&token.value, QuoteStyle::Single)))
            }
            TokenKind::DoubleQuotedString => {
                tokens.next();
                Ok(ConstExpr::String(StringLiteral::from_token_value(&token.value, QuoteStyle::Double)))
            }
            TokenKind::Identifier => {
                tokens.next();
                if token.is_keyword(KeywordId::True) {
                    return Ok(ConstExpr::True);
                }
                if token.is_keyword(KeywordId::False) {
                    return Ok(ConstExpr::False);
                }
                if token.is_keyword(KeywordId::Null) {
                    return Ok(ConstExpr::Null);
                }
                if token.is_keyword(KeywordId::Array)
                    && allow_arrays
                    && tokens.try_consume_token_type(TokenKind::punct(PunctuationId::LParen))
                {
                    return self.parse_array(tokens, PunctuationId::RParen, depth + 1);
                }
                if tokens.try_consume_token_type(TokenKind::punct(PunctuationId::ColonColon)) {
                    let name = parse_class_constant_name(tokens)?;
                    return Ok(ConstExpr::ConstFetch {
                        class_name: token.value,
                        name,
                    });
                }
                Ok(ConstExpr::ConstFetch {
                    class_name: String::new(),
                    name: token.value,
                })
            }
            TokenKind::Punctuation(PunctuationId::LBracket) if allow_arrays => {
                tokens.next();
                self.parse_array(tokens, PunctuationId::RBracket, depth + 1)
            }
            _ => Err(ParseError::unexpected(&token, Some(TokenKind::Identifier))),
        }
    }

    fn parse_array(
        &self,
        tokens: &mut TokenIterator,
        end: PunctuationId,
        depth: usize,
    ) -> Result<ConstExpr, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::nesting_too_deep(self.max_depth, tokens.current_token()));
        }
        let end = TokenKind::punct(end);
        let comma = TokenKind::punct(PunctuationId::Comma);
        let mut items = Vec::new();
        if tokens.try_consume_token_type(end) {
            return Ok(ConstExpr::Array(items));
        }
        loop {
            items.push(self.parse_array_item(tokens, depth)?);
            if !tokens.try_consume_token_type(comma) || tokens.is_current_token_type(end) {
                break;
            }
        }
        tokens.consume_token_type(end)?;
        Ok(ConstExpr::Array(items))
    }

    fn parse_array_item(&self, tokens: &mut TokenIterator, depth: usize) -> Result<ConstExprArrayItem, ParseError> {
        let first = self.parse_at(tokens, true, depth)?;
        if tokens.try_consume_token_type(TokenKind::punct(PunctuationId::FatArrow)) {
            let value = self.parse_at(tokens, true, depth)?;
            Ok(ConstExprArrayItem {
                key: Some(first),
                value,
            })
        } else {
            Ok(ConstExprArrayItem {
                key: None,
                value: first,
            })
        }
    }
}

/// Name after `Class::`: identifier parts and `*` wildcards, alternating. A wildcard followed by whitespace ends
/// the name.
fn parse_class_constant_name(tokens: &mut TokenIterator) -> Result<String, ParseError> {
    let star = TokenKind::punct(PunctuationId::Star);
    let mut name = String::new();
    let mut last: Option<TokenKind> = None;
    loop {
        if last != Some(TokenKind::Identifier) && tokens.is_current_token_type(TokenKind::Identifier) {
            name.push_str(tokens.current_token_value());
            tokens.next();
            last = Some(TokenKind::Identifier);
            continue;
        }
        if last != Some(star) && tokens.try_consume_token_type(star) {
            name.push('*');
            last = Some(star);
            if tokens.is_preceded_by_horizontal_whitespace() {
                break;
            }
            continue;
        }
        if last.is_none() {
            tokens.consume_token_type(star)?;
        }
        break;
    }
    Ok(name)
}
