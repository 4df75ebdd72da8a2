//! Parser for PHPDoc type expressions.
//!
//! Recursive descent over a [`TokenIterator`], producing a [`TypeNode`]. Productions that can only be told apart
//! by trying them (callables, `[]` suffixes, keyed shape items, the HTML-tag lookahead) push a save point, attempt
//! the production, and either drop the save point or roll back and take the alternative.
//!
//! ## Examples
//!
//! ```rust
//! use phpdoc_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("array<int, string>").unwrap();
//! let ty = parser::parse_type(tokens).unwrap();
//! assert_eq!(ty.to_string(), "array<int, string>");
//! ```

use crate::ast::*;
use crate::config::ParserConfig;
use crate::const_expr::{ConstExprParser, PhpConstExprParser};
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::token_iterator::TokenIterator;
use phpdoc_core::lang::keywords::{self, KeywordId};
use phpdoc_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/types.rs");
include!("parser/callable.rs");
include!("parser/arrays.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
