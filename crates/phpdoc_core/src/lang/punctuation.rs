//! Punctuation vocabulary.
//!
//! This module defines the canonical set of symbol tokens used by the PHPDoc type lexer/parser: delimiters,
//! separators, type operators, and a few structural markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//! - `&` is registered once, as the intersection operator. Its by-reference reading is a lexer decision that
//!   depends on the following characters, so it has no registry entry of its own.
//!
//! ## Examples
//! ```rust
//! use phpdoc_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctuationId::FatArrow), "=>");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces, parentheses and angle brackets.
    Delimiter,
    /// Separators like `,` and `:`.
    Separator,
    /// Type operators: `|`, `&`, `?`.
    TypeOperator,
    /// Access markers like `::`.
    Access,
    /// Misc markers like `=`, `=>`, `...`, `*`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Colon,

    // Access
    ColonColon,

    // Type operators
    Pipe,
    Ampersand,
    Question,

    // Markers
    Equal,
    FatArrow,
    Ellipsis,
    Star,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LAngle,
    RAngle,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    // Access
    info(PunctuationId::ColonColon, "::", PunctuationCategory::Access),
    // Type operators
    info(PunctuationId::Pipe, "|", PunctuationCategory::TypeOperator),
    info(PunctuationId::Ampersand, "&", PunctuationCategory::TypeOperator),
    info(PunctuationId::Question, "?", PunctuationCategory::TypeOperator),
    // Markers
    info(PunctuationId::Equal, "=", PunctuationCategory::Marker),
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Marker),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker),
    info(PunctuationId::Star, "*", PunctuationCategory::Marker),
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::LAngle, "<", PunctuationCategory::Delimiter),
    info(PunctuationId::RAngle, ">", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return every spelling, longest first.
///
/// The lexer builds its punctuation alternative from this list; longer spellings must come first so `::` wins
/// over `:` and `...` is never split.
pub fn spellings_longest_first() -> Vec<&'static str> {
    let mut spellings: Vec<&'static str> = PUNCTUATION.iter().map(|p| p.canonical).collect();
    spellings.sort_by(|a, b| b.len().cmp(&a.len()));
    spellings
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_first_puts_multi_char_spellings_ahead() {
        let spellings = spellings_longest_first();
        let pos = |s: &str| spellings.iter().position(|x| *x == s).unwrap();
        assert!(pos("...") < pos(":"));
        assert!(pos("::") < pos(":"));
        assert!(pos("=>") < pos("="));
    }

    #[test]
    fn test_categories() {
        assert_eq!(category(PunctuationId::Pipe), PunctuationCategory::TypeOperator);
        assert_eq!(category(PunctuationId::LAngle), PunctuationCategory::Delimiter);
        assert_eq!(category(PunctuationId::ColonColon), PunctuationCategory::Access);
    }
}
