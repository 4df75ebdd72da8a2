//! Canonical vocabulary for PHPDoc type expressions.
//!
//! This crate is intentionally small and dependency-light. It holds the registries that both the lexer and the
//! parser consult, so symbol spellings and reserved words live in exactly one place.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Current scope: punctuation tokens of the type grammar and the reserved words that carry meaning for the
//!   grammar or for quoting decisions.

pub mod lang;
