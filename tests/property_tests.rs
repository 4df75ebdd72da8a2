//! Property-based tests for the PHPDoc type parser
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use phpdoc_types::lexer;
use phpdoc_types::token_iterator::TokenIterator;
use phpdoc_types::{ParseError, TypeParser, parse_type};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn pick(options: &'static [&'static str]) -> impl Strategy<Value = String> + Clone {
    prop::sample::select(options).prop_map(str::to_string)
}

/// Plain type names, usable wherever the grammar wants an identifier.
fn name_strategy() -> impl Strategy<Value = String> + Clone {
    pick(&["int", "string", "null", "true", "Foo", r"\App\Model", "non-empty-string", "array", "list"])
}

fn leaf_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        3 => name_strategy(),
        2 => pick(&[
            "$this",
            "'lit'",
            "'a b'",
            "\"dq\"",
            "42",
            "-1",
            ".5",
            "-1.5",
            "1e3",
            "Foo::BAR",
            "Foo::BAR_*",
            "Foo::*",
            "(?Foo)",
        ]),
    ]
    .boxed()
}

fn array_suffix(on: bool) -> &'static str {
    if on { "[]" } else { "" }
}

/// An operand after `&` that starts with `.` would lex as a by-reference marker, so it is written in parentheses.
fn intersection_operand(operand: &str) -> String {
    if operand.starts_with('.') {
        format!("({operand})")
    } else {
        operand.to_string()
    }
}

/// `?Name`, `?Name<T>`, each with optional `[]`.
fn nullable_strategy(atomic: BoxedStrategy<String>) -> impl Strategy<Value = String> {
    (name_strategy(), prop::option::of(atomic), any::<bool>()).prop_map(|(name, arg, array)| {
        let args = arg.map(|a| format!("<{a}>")).unwrap_or_default();
        format!("?{name}{args}{}", array_suffix(array))
    })
}

/// Any type: an atomic, an unparenthesized union or intersection chain, or a nullable.
fn full_type(atomic: BoxedStrategy<String>) -> BoxedStrategy<String> {
    prop_oneof![
        4 => atomic.clone(),
        1 => prop::collection::vec(atomic.clone(), 2..4).prop_map(|members| members.join("|")),
        1 => prop::collection::vec(atomic.clone(), 2..4).prop_map(|members| {
            members.iter().map(|m| intersection_operand(m)).collect::<Vec<_>>().join("&")
        }),
        1 => nullable_strategy(atomic),
    ]
    .boxed()
}

fn shape_item_strategy(full: BoxedStrategy<String>) -> impl Strategy<Value = String> {
    prop_oneof![
        full.clone(),
        (pick(&["key", "0", "'quoted key'", "\"dq\""]), any::<bool>(), full).prop_map(|(key, optional, value)| {
            let optional = if optional { "?" } else { "" };
            format!("{key}{optional}: {value}")
        }),
    ]
}

fn parameter_strategy(full: BoxedStrategy<String>) -> impl Strategy<Value = String> {
    (
        full,
        any::<bool>(),
        any::<bool>(),
        prop::option::of(pick(&["$x", "$values", "$thisOne"])),
        any::<bool>(),
    )
        .prop_map(|(ty, reference, variadic, name, optional)| {
            let mut param = ty;
            if reference || variadic || name.is_some() {
                param.push(' ');
            }
            if reference {
                param.push('&');
            }
            if variadic {
                param.push_str("...");
            }
            if let Some(name) = name {
                param.push_str(&name);
            }
            if optional {
                param.push('=');
            }
            param
        })
}

/// Callable return types, parenthesized only when the grammar requires it.
fn return_type_strategy(full: BoxedStrategy<String>) -> impl Strategy<Value = String> {
    prop_oneof![
        name_strategy(),
        name_strategy().prop_map(|n| format!("{n}[]")),
        name_strategy().prop_map(|n| format!("?{n}")),
        name_strategy().prop_map(|n| format!("?{n}[]")),
        (name_strategy(), full.clone()).prop_map(|(n, arg)| format!("{n}<{arg}>")),
        full.clone().prop_map(|value| format!("array{{key: {value}}}")),
        (full, any::<bool>()).prop_map(|(ty, array)| format!("({ty}){}", array_suffix(array))),
    ]
}

/// Syntactically atomic types. Compounds nest full types wherever the grammar allows one.
fn atomic_strategy() -> BoxedStrategy<String> {
    leaf_strategy()
        .prop_recursive(3, 32, 3, |inner| {
            let full = full_type(inner);
            prop_oneof![
                (full.clone(), any::<bool>()).prop_map(|(ty, array)| format!("({ty}){}", array_suffix(array))),
                name_strategy().prop_map(|n| format!("{n}[]")),
                (name_strategy(), prop::collection::vec(full.clone(), 1..3), any::<bool>())
                    .prop_map(|(n, args, array)| format!("{n}<{}>{}", args.join(", "), array_suffix(array))),
                (prop::collection::vec(shape_item_strategy(full.clone()), 0..3), any::<bool>())
                    .prop_map(|(items, array)| format!("array{{{}}}{}", items.join(", "), array_suffix(array))),
                (
                    pick(&["callable", "Closure", r"\Closure"]),
                    prop::collection::vec(parameter_strategy(full.clone()), 0..3),
                    return_type_strategy(full),
                )
                    .prop_map(|(n, params, ret)| format!("{n}({}): {ret}", params.join(", "))),
            ]
        })
        .boxed()
}

fn type_strategy() -> impl Strategy<Value = String> {
    full_type(atomic_strategy())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: rendering is canonical (parse(render(parse(s))) == parse(s))
    #[test]
    fn rendered_types_reparse_to_the_same_tree(source in type_strategy()) {
        let first = parse_type(&source).expect("generated type failed to parse");
        let rendered = first.to_string();
        let second = parse_type(&rendered).expect("rendered type failed to parse");
        prop_assert_eq!(first, second, "rendered as {}", rendered);
    }

    /// Property: every parse, successful or not, leaves no save point behind
    #[test]
    fn save_points_are_balanced(source in r"[a-z$(){}<>\[\]|&?:,=. '0-9]{0,24}") {
        let Ok(tokens) = lexer::tokenize(&source) else {
            return Ok(());
        };
        let parser = TypeParser::with_php_constants();
        let mut iter = TokenIterator::new(tokens);
        let _ = parser.parse(&mut iter);
        prop_assert_eq!(iter.save_point_depth(), 0);
    }

    /// Property: the lexer covers its input exactly, and never panics
    #[test]
    fn tokens_cover_the_normalized_input(source in any::<String>()) {
        if let Ok(tokens) = lexer::tokenize(&source) {
            let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
            prop_assert_eq!(joined, source.replace('\r', ""));
            let mut expected_offset = 0;
            for token in &tokens {
                prop_assert_eq!(token.offset, expected_offset);
                expected_offset += token.value.len();
            }
        }
    }

    /// Property: array literals nested past the limit fail with a nesting error instead of overflowing the stack
    #[test]
    fn deep_const_arrays_fail_cleanly(depth in 130usize..4_000, opener in pick(&["[", "array(", "[array("])) {
        let source = opener.repeat(depth);
        let result = parse_type(&source);
        prop_assert!(
            matches!(result, Err(ParseError::NestingTooDeep { .. })),
            "unexpected result {:?}",
            result
        );
    }

    /// Property: arbitrary text never panics the full pipeline
    #[test]
    fn parse_type_never_panics(source in any::<String>()) {
        let _ = parse_type(&source);
    }
}
