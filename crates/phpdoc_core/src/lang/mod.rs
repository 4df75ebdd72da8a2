//! PHPDoc type vocabulary registries.
//!
//! Callers work with **stable IDs** (`PunctuationId`, `KeywordId`) and look up spellings/metadata via the
//! registry tables instead of comparing raw strings at every call site.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (pattern
//!   construction, diagnostics, rendering).
//!
//! ## Examples
//! ```rust
//! use phpdoc_core::lang::keywords::{self, KeywordId};
//! use phpdoc_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(keywords::from_str("NULL"), Some(KeywordId::Null));
//! assert_eq!(punctuation::as_str(PunctuationId::ColonColon), "::");
//! ```

pub mod keywords;
pub mod punctuation;
