//! Define the reserved words that carry meaning for PHPDoc types.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive**: PHP treats `NULL`, `Null` and `null` alike, and so do the
//!   quoting rules.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use phpdoc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Array"), Some(KeywordId::Array));
//! assert!(keywords::requires_quoting("Yes"));
//! assert!(!keywords::requires_quoting("array"));
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Scalar literals
    True,
    False,
    Null,

    // Boolean aliases
    Yes,
    No,
    On,
    Off,

    // Structural words of the type grammar
    Array,
    This,
}

/// Broad grouping for reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `true`, `false`, `null`: constant expressions in their own right.
    ScalarLiteral,
    /// `yes`, `no`, `on`, `off`: read as booleans by configuration formats, so they must be quoted.
    BooleanAlias,
    /// Words that change how the type grammar continues (`array{`, `array(`, `$this`).
    Structural,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::True, "true", KeywordCategory::ScalarLiteral),
    info(KeywordId::False, "false", KeywordCategory::ScalarLiteral),
    info(KeywordId::Null, "null", KeywordCategory::ScalarLiteral),
    info(KeywordId::Yes, "yes", KeywordCategory::BooleanAlias),
    info(KeywordId::No, "no", KeywordCategory::BooleanAlias),
    info(KeywordId::On, "on", KeywordCategory::BooleanAlias),
    info(KeywordId::Off, "off", KeywordCategory::BooleanAlias),
    info(KeywordId::Array, "array", KeywordCategory::Structural),
    info(KeywordId::This, "this", KeywordCategory::Structural),
];

/// Canonical (lowercase) spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category of a reserved word.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: keyword info missing")
}

/// Lookup by spelling, ignoring ASCII case.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}

/// Return `true` if `s` spells the given reserved word (ASCII case-insensitive).
pub fn is(s: &str, id: KeywordId) -> bool {
    as_str(id).eq_ignore_ascii_case(s)
}

/// Return `true` if a bare word would be read as a scalar or boolean instead of a string.
pub fn requires_quoting(s: &str) -> bool {
    matches!(
        from_str(s).map(category),
        Some(KeywordCategory::ScalarLiteral | KeywordCategory::BooleanAlias)
    )
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
