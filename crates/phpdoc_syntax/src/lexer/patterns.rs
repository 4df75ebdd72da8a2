//! Ordered pattern table for the regex-driven lexer.
//!
//! The table order is the disambiguation priority: strings, then literals, then punctuation, then comments,
//! newlines and whitespace, and finally the catch-all for free text. The combined pattern is one anchored
//! alternation with one capture group per row; the first group that participates in a match names the row.

use std::sync::LazyLock;

use phpdoc_core::lang::punctuation;
use regex::Regex;

/// Which row of [`PATTERNS`] produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenClass {
    SingleQuotedString,
    DoubleQuotedString,
    Variable,
    Float,
    Integer,
    Identifier,
    Punctuation,
    Comment,
    PhpDocEol,
    HorizontalWhitespace,
    Other,
}

const NAME_START: &str = r"[a-zA-Z_\x{80}-\x{10FFFF}]";
const NAME_CONTINUE: &str = r"[0-9a-zA-Z_\x{80}-\x{10FFFF}]";
const IDENTIFIER_CONTINUE: &str = r"[0-9a-zA-Z_\x{80}-\x{10FFFF}\-]";

/// Rows of the combined token pattern, in priority order. `None` marks the punctuation row, which is generated
/// from the punctuation registry.
const PATTERNS: &[(TokenClass, Option<&str>)] = &[
    // strings
    (TokenClass::SingleQuotedString, Some(r"'''\n(?:[^\n]*\n)*?[\t ]*'''")),
    (TokenClass::DoubleQuotedString, Some(r#""""\n(?:[^\n]*\n)*?[\t ]*""""#)),
    (TokenClass::SingleQuotedString, Some(r"'(?:\\[^\n]|[^'\n\\])*'")),
    (TokenClass::DoubleQuotedString, Some(r#""(?:\\[^\n]|[^"\n\\])*""#)),
    // literals
    (TokenClass::Variable, None),
    (
        TokenClass::Float,
        Some(r"(?i:-?[0-9]+\.[0-9]*(?:e-?[0-9]+)?|-?[0-9]*\.[0-9]+(?:e-?[0-9]+)?|-?[0-9]+e-?[0-9]+)"),
    ),
    (TokenClass::Integer, Some(r"(?i:-?(?:0b[01]+|0o[0-7]+|0x[0-9a-f]+|[0-9]+))")),
    (TokenClass::Identifier, None),
    // punctuation
    (TokenClass::Punctuation, None),
    // comment
    (TokenClass::Comment, Some(r"#[^\n]*")),
    // new line, with the indentation and `*` of a doc comment continuation
    (TokenClass::PhpDocEol, Some(r"(?:\n[\t ]*(?:\*[\t ]?)?)+")),
    // whitespace
    (TokenClass::HorizontalWhitespace, Some(r"[\t ]+")),
    // anything else that is not whitespace
    (TokenClass::Other, Some(r"\S+")),
];

fn row_pattern(class: TokenClass, pattern: Option<&str>) -> String {
    match (class, pattern) {
        (_, Some(p)) => p.to_string(),
        (TokenClass::Variable, None) => format!(r"\${NAME_START}{NAME_CONTINUE}*"),
        (TokenClass::Identifier, None) => {
            format!(r"\\?{NAME_START}{IDENTIFIER_CONTINUE}*(?:\\{NAME_START}{IDENTIFIER_CONTINUE}*)*")
        }
        (_, None) => punctuation::spellings_longest_first()
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|"),
    }
}

fn build_token_pattern() -> Regex {
    let rows: Vec<String> = PATTERNS
        .iter()
        .map(|(class, pattern)| format!("({})", row_pattern(*class, *pattern)))
        .collect();
    let pattern = format!("^(?:{})", rows.join("|"));
    Regex::new(&pattern).expect("INVARIANT: token pattern compiles")
}

/// The combined, anchored token pattern.
pub(crate) static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(build_token_pattern);

/// Token class of capture group `index` (1-based, as reported by `regex::Captures`).
pub(crate) fn class_of_group(index: usize) -> TokenClass {
    PATTERNS[index - 1].0
}

/// Control characters, or something that reads as a (signed/decimal) number.
pub(crate) static SCALAR_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x1F]|^[+.\-]?[0-9]").expect("INVARIANT: scalar pattern compiles"));

/// A bare word that needs no delimiters: no structural punctuation at the start, no `, : = ] } ) (` inside, and
/// `:` or whitespace only when followed by more of the word.
pub(crate) static BARE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    let first = r#"[^#"',:=\[\]{}()\n\t `\-]|[:\-][^"',=\[\]{}()\n\t ]"#;
    let rest = r"[^,:=\]})(\n\t ]+|:+[^,:=\]})(\n\t ]|[ \t]+[^#,:=\]})(\n\t ]";
    Regex::new(&format!("^(?:{first})(?:{rest})*$")).expect("INVARIANT: literal pattern compiles")
});
