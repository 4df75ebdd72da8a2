//! Syntax frontend for PHPDoc type annotations: lexer, token iterator, type parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by documentation tools, linters and editors that need
//! to read `@param`/`@return` style types.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names or check types.
//! - Vocabulary identity (punctuation/reserved words) comes from `phpdoc_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use phpdoc_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("?Foo[]").unwrap();
//! let ty = parser::parse_type(tokens).unwrap();
//! assert_eq!(ty.to_string(), "?Foo[]");
//! ```
//!
//! ## See also
//! - `phpdoc_core::lang` for registry-backed vocabulary (punctuation/keywords).

pub mod ast;
pub mod config;
pub mod const_expr;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod token_iterator;
