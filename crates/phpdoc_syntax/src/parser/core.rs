/// Parser core type and entrypoint.
///
/// This chunk defines [`TypeParser`] and its top-level `parse()` entrypoint, plus the token shorthands shared
/// across the other parser chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
const fn punct(id: PunctuationId) -> TokenKind {
    TokenKind::Punctuation(id)
}

/// Recursive-descent parser for type expressions.
///
/// ## Notes
/// - The parser holds no per-parse state; all cursor state lives in the [`TokenIterator`]. One instance can be
///   shared across threads and reused for any number of parses.
/// - Without a constant-expression parser, atomics that are not identifiers, `$this` or `(` fail with an
///   identifier-expected error.
pub struct TypeParser {
    config: ParserConfig,
    const_expr_parser: Option<Box<dyn ConstExprParser>>,
}

impl Default for TypeParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl TypeParser {
    /// Create a parser without a constant-expression collaborator.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            const_expr_parser: None,
        }
    }

    /// Install the parser used for constant types (`Foo::BAR`, `'literal'`, `42`).
    pub fn with_const_expr_parser(mut self, parser: Box<dyn ConstExprParser>) -> Self {
        self.const_expr_parser = Some(parser);
        self
    }

    /// Parser with default configuration and [`PhpConstExprParser`] installed.
    pub fn with_php_constants() -> Self {
        Self::default().with_const_expr_parser(Box::new(PhpConstExprParser::default()))
    }

    /// Parse one type starting at the cursor.
    ///
    /// The cursor is left on the first token after the type; callers decide whether anything may follow.
    ///
    /// ## Errors
    /// - [`ParseError::UnexpectedToken`] when no production matches.
    /// - [`ParseError::NestingTooDeep`] when nesting exceeds [`ParserConfig::max_depth`].
    pub fn parse(&self, tokens: &mut TokenIterator) -> Result<TypeNode, ParseError> {
        self.parse_type_at(tokens, 0)
    }

    fn enter(&self, tokens: &TokenIterator, depth: usize) -> Result<(), ParseError> {
        if depth > self.config.max_depth {
            return Err(ParseError::nesting_too_deep(self.config.max_depth, tokens.current_token()));
        }
        Ok(())
    }
}
