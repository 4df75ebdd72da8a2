//! Values of `@param` and `@return` tags.
//!
//! A tag value is a type followed by free text. For `@param` a variable name sits in between, optionally marked
//! by-reference (`&`) and variadic (`...`). Splitting a doc comment into tags is left to the caller.

use std::fmt;

use crate::ast::TypeNode;
use crate::diagnostics::ParseError;
use crate::lexer::TokenKind;
use crate::parser::TypeParser;
use crate::token_iterator::TokenIterator;
use phpdoc_core::lang::punctuation::PunctuationId;

/// `@param int &...$values Description`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTagValue {
    pub ty: TypeNode,
    pub is_reference: bool,
    pub is_variadic: bool,
    /// Includes the leading `$`.
    pub parameter_name: String,
    pub description: String,
}

impl fmt::Display for ParamTagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference = if self.is_reference { "&" } else { "" };
        let variadic = if self.is_variadic { "..." } else { "" };
        let rendered = format!(
            "{} {reference}{variadic}{} {}",
            self.ty, self.parameter_name, self.description
        );
        f.write_str(rendered.trim())
    }
}

/// `@return Type Description`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnTagValue {
    pub ty: TypeNode,
    pub description: String,
}

impl fmt::Display for ReturnTagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!("{} {}", self.ty, self.description);
        f.write_str(rendered.trim())
    }
}

/// Parser for tag values, on top of a [`TypeParser`].
pub struct TagValueParser {
    type_parser: TypeParser,
}

impl Default for TagValueParser {
    fn default() -> Self {
        Self::new(TypeParser::with_php_constants())
    }
}

impl TagValueParser {
    pub fn new(type_parser: TypeParser) -> Self {
        Self { type_parser }
    }

    /// Parse `Type [&][...]$name [description]` at the cursor.
    ///
    /// The description runs to the next doc-comment newline or the end of input, and is trimmed.
    ///
    /// ## Errors
    /// Fails if the type does not parse or the variable name is missing.
    pub fn parse_param(&self, tokens: &mut TokenIterator) -> Result<ParamTagValue, ParseError> {
        let ty = self.type_parser.parse(tokens)?;
        let is_reference = tokens.try_consume_token_type(TokenKind::Reference);
        let is_variadic = tokens.try_consume_token_type(TokenKind::punct(PunctuationId::Ellipsis));
        let parameter_name = tokens.current_token_value().to_string();
        tokens.consume_token_type(TokenKind::Variable)?;
        let description = parse_description(tokens);
        Ok(ParamTagValue {
            ty,
            is_reference,
            is_variadic,
            parameter_name,
            description,
        })
    }

    /// Parse `Type [description]` at the cursor.
    pub fn parse_return(&self, tokens: &mut TokenIterator) -> Result<ReturnTagValue, ParseError> {
        let ty = self.type_parser.parse(tokens)?;
        let description = parse_description(tokens);
        Ok(ReturnTagValue { ty, description })
    }

    /// Tokenize `source` and parse it as a `@param` value.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_param_str(&self, source: &str) -> Result<ParamTagValue, ParseError> {
        let mut tokens = TokenIterator::from_source(source)?;
        self.parse_param(&mut tokens)
    }

    /// Tokenize `source` and parse it as a `@return` value.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse_return_str(&self, source: &str) -> Result<ReturnTagValue, ParseError> {
        let mut tokens = TokenIterator::from_source(source)?;
        self.parse_return(&mut tokens)
    }
}

fn parse_description(tokens: &mut TokenIterator) -> String {
    tokens.join_until(&[TokenKind::PhpDocEol]).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_with_description() {
        let value = TagValueParser::default()
            .parse_param_str("int|string $id The record id")
            .unwrap();
        assert_eq!(value.parameter_name, "$id");
        assert_eq!(value.description, "The record id");
        assert!(!value.is_reference);
        insta::assert_snapshot!(value.to_string(), @"(int | string) $id The record id");
    }

    #[test]
    fn test_param_reference_and_variadic() {
        let value = TagValueParser::default().parse_param_str("int &...$values").unwrap();
        assert!(value.is_reference);
        assert!(value.is_variadic);
        assert_eq!(value.description, "");
        insta::assert_snapshot!(value.to_string(), @"int &...$values");
    }

    #[test]
    fn test_param_requires_variable() {
        let err = TagValueParser::default().parse_param_str("int").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, .. } => {
                assert_eq!(expected, Some(TokenKind::Variable));
                assert_eq!(found, TokenKind::End);
            }
            other => panic!("Expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn test_description_stops_at_newline() {
        let mut tokens = TokenIterator::from_source("Foo[] the list\n * @throws Bar").unwrap();
        let value = TagValueParser::default().parse_return(&mut tokens).unwrap();
        assert_eq!(value.description, "the list");
        assert!(tokens.is_current_token_type(TokenKind::PhpDocEol));
        insta::assert_snapshot!(value.to_string(), @"Foo[] the list");
    }

    #[test]
    fn test_return_with_html_description() {
        let value = TagValueParser::default()
            .parse_return_str("Foo <b>bold</b> text")
            .unwrap();
        assert_eq!(value.ty, TypeNode::identifier("Foo"));
        assert_eq!(value.description, "<b>bold</b> text");
    }
}
