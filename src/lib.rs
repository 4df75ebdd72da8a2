#![forbid(unsafe_code)]
//! PHPDoc type annotation parsing.
//!
//! Turns the type part of a doc comment (`array<int, string>`, `?Foo[]`, `callable(int=): bool`) into a typed
//! AST that renders back to canonical text. The heavy lifting lives in `phpdoc_syntax`; this crate is the
//! tooling-facing surface: one-call helpers and `@param`/`@return` tag value parsing.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Bad input never panics.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a parser bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation. Unbalanced save points are the main example.
//!
//! ## Examples
//! ```rust
//! let ty = phpdoc_types::parse_type("array{name: string, age?: int}").unwrap();
//! assert_eq!(ty.to_string(), "array{name: string, age?: int}");
//! ```

pub mod tags;

pub use phpdoc_core::lang;
pub use phpdoc_syntax::{ast, config, const_expr, diagnostics, lexer, parser, token_iterator};

pub use ast::TypeNode;
pub use config::ParserConfig;
pub use const_expr::{ConstExprParser, PhpConstExprParser};
pub use diagnostics::ParseError;
pub use lexer::requires_delimiters;
pub use parser::TypeParser;
pub use tags::{ParamTagValue, ReturnTagValue, TagValueParser};

/// Parse a complete type expression with the default configuration.
///
/// ## Errors
/// Returns a [`ParseError`] if the text does not tokenize, is not a type, or has anything after the type.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_type(source: &str) -> Result<TypeNode, ParseError> {
    parse_type_with_config(source, ParserConfig::default())
}

/// Parse a complete type expression with an explicit configuration. Constant types are enabled.
pub fn parse_type_with_config(source: &str, config: ParserConfig) -> Result<TypeNode, ParseError> {
    let const_expr_parser = PhpConstExprParser::new(config.max_depth);
    let parser = TypeParser::new(config).with_const_expr_parser(Box::new(const_expr_parser));
    let tokens = lexer::tokenize(source)?;
    parser::parse_type_with(&parser, tokens)
}
