/// Type-expression parsing methods.
///
/// This chunk parses the type grammar proper:
/// - Nullable types (`?Foo`)
/// - Atomics (`Foo`, `$this`, `(...)`, constant types)
/// - Union and intersection chains (`A|B`, `A&B`)
/// - Generic applications (`array<int, string>`)
///
/// ## Notes
/// - Union and intersection do not nest without parentheses: whichever operator follows the first atomic
///   decides the chain, and the other operator ends it.
impl TypeParser {
    // ========================================================================
    // Types
    // ========================================================================

    fn parse_type_at(&self, tokens: &mut TokenIterator, depth: usize) -> Result<TypeNode, ParseError> {
        self.enter(tokens, depth)?;
        if tokens.is_current_token_type(punct(PunctuationId::Question)) {
            return self.parse_nullable(tokens, depth);
        }

        let ty = self.parse_atomic(tokens, depth)?;
        if tokens.is_current_token_type(punct(PunctuationId::Pipe)) {
            self.parse_union(tokens, ty, depth)
        } else if tokens.is_current_token_type(punct(PunctuationId::Ampersand)) {
            self.parse_intersection(tokens, ty, depth)
        } else {
            Ok(ty)
        }
    }

    fn parse_atomic(&self, tokens: &mut TokenIterator, depth: usize) -> Result<TypeNode, ParseError> {
        if tokens.try_consume_token_type(punct(PunctuationId::LParen)) {
            let ty = self.parse_type_at(tokens, depth + 1)?;
            tokens.consume_token_type(punct(PunctuationId::RParen))?;
            return Ok(self.try_parse_array(tokens, ty));
        }

        if tokens.try_consume_token_type(TokenKind::ThisVariable) {
            return Ok(self.try_parse_array(tokens, TypeNode::This));
        }

        // `Foo::BAR` starts like an identifier but belongs to the constant grammar
        let name = tokens.current_token_value().to_string();
        tokens.push_save_point();
        if tokens.try_consume_token_type(TokenKind::Identifier) {
            if !tokens.is_current_token_type(punct(PunctuationId::ColonColon)) {
                tokens.drop_save_point();
                return self.parse_identifier_suffix(tokens, IdentifierTypeNode::new(name), depth);
            }
            tokens.rollback();
        } else {
            tokens.drop_save_point();
        }

        self.parse_const_type(tokens)
    }

    /// What may follow a plain identifier: generics, a callable signature, `[]` suffixes or a shape body.
    fn parse_identifier_suffix(
        &self,
        tokens: &mut TokenIterator,
        ident: IdentifierTypeNode,
        depth: usize,
    ) -> Result<TypeNode, ParseError> {
        if tokens.is_current_token_type(punct(PunctuationId::LAngle)) {
            if self.config.html_lookahead && self.looks_like_html(tokens) {
                return Ok(TypeNode::Identifier(ident));
            }
            let ty = self.parse_generic(tokens, ident, depth)?;
            return Ok(self.try_parse_array(tokens, ty));
        }
        if tokens.is_current_token_type(punct(PunctuationId::LParen)) {
            return self.try_parse_callable(tokens, ident, depth);
        }
        if at_array_shape(tokens, &ident) {
            let shape = self.parse_array_shape(tokens, depth)?;
            return Ok(self.try_parse_array(tokens, shape));
        }
        Ok(self.try_parse_array(tokens, TypeNode::Identifier(ident)))
    }

    /// Constant type fallback. Recoverable failures, and array literals, report the identifier the grammar wanted
    /// here. Nesting errors pass through.
    fn parse_const_type(&self, tokens: &mut TokenIterator) -> Result<TypeNode, ParseError> {
        let expected = ParseError::unexpected(tokens.current_token(), Some(TokenKind::Identifier));
        let Some(const_expr_parser) = &self.const_expr_parser else {
            return Err(expected);
        };
        match const_expr_parser.parse(tokens, true) {
            Ok(expr) if !expr.is_array() => Ok(TypeNode::Const(expr)),
            Err(err) if !err.is_recoverable() => Err(err),
            _ => Err(expected),
        }
    }

    fn parse_union(&self, tokens: &mut TokenIterator, first: TypeNode, depth: usize) -> Result<TypeNode, ParseError> {
        let mut types = vec![first];
        while tokens.try_consume_token_type(punct(PunctuationId::Pipe)) {
            types.push(self.parse_atomic(tokens, depth)?);
        }
        Ok(TypeNode::Union(types))
    }

    fn parse_intersection(
        &self,
        tokens: &mut TokenIterator,
        first: TypeNode,
        depth: usize,
    ) -> Result<TypeNode, ParseError> {
        let mut types = vec![first];
        while tokens.try_consume_token_type(punct(PunctuationId::Ampersand)) {
            types.push(self.parse_atomic(tokens, depth)?);
        }
        Ok(TypeNode::Intersection(types))
    }

    /// `?Name`, `?Name<...>` or `?array{...}`, then `[]` suffixes, all under one nullable.
    fn parse_nullable(&self, tokens: &mut TokenIterator, depth: usize) -> Result<TypeNode, ParseError> {
        tokens.consume_token_type(punct(PunctuationId::Question))?;
        let ident = IdentifierTypeNode::new(tokens.current_token_value());
        tokens.consume_token_type(TokenKind::Identifier)?;

        let ty = if tokens.is_current_token_type(punct(PunctuationId::LAngle)) {
            self.parse_generic(tokens, ident, depth)?
        } else if at_array_shape(tokens, &ident) {
            self.parse_array_shape(tokens, depth)?
        } else {
            TypeNode::Identifier(ident)
        };
        Ok(TypeNode::nullable(self.try_parse_array(tokens, ty)))
    }

    /// Look ahead for `<tag>...</tag>` after an identifier. The cursor is always restored.
    fn looks_like_html(&self, tokens: &mut TokenIterator) -> bool {
        tokens.push_save_point();
        let is_html = is_html(tokens);
        tokens.rollback();
        if is_html {
            tracing::trace!(offset = tokens.current_token_offset(), "angle bracket opens an HTML tag");
        }
        is_html
    }

    fn parse_generic(
        &self,
        tokens: &mut TokenIterator,
        base: IdentifierTypeNode,
        depth: usize,
    ) -> Result<TypeNode, ParseError> {
        tokens.consume_token_type(punct(PunctuationId::LAngle))?;
        tokens.try_consume_token_type(TokenKind::PhpDocEol);
        let mut args = vec![self.parse_type_at(tokens, depth + 1)?];
        tokens.try_consume_token_type(TokenKind::PhpDocEol);

        while tokens.try_consume_token_type(punct(PunctuationId::Comma)) {
            tokens.try_consume_token_type(TokenKind::PhpDocEol);
            if tokens.try_consume_token_type(punct(PunctuationId::RAngle)) {
                // trailing comma
                return Ok(TypeNode::Generic(GenericTypeNode { base, args }));
            }
            args.push(self.parse_type_at(tokens, depth + 1)?);
            tokens.try_consume_token_type(TokenKind::PhpDocEol);
        }

        tokens.try_consume_token_type(TokenKind::PhpDocEol);
        tokens.consume_token_type(punct(PunctuationId::RAngle))?;
        Ok(TypeNode::Generic(GenericTypeNode { base, args }))
    }
}

/// `<name>` followed somewhere later by `</name>`.
fn is_html(tokens: &mut TokenIterator) -> bool {
    tokens.next();
    if !tokens.is_current_token_type(TokenKind::Identifier) {
        return false;
    }
    let closing = format!("/{}>", tokens.current_token_value());
    tokens.next();
    if !tokens.try_consume_token_type(punct(PunctuationId::RAngle)) {
        return false;
    }
    while !tokens.is_current_token_type(TokenKind::End) {
        if tokens.try_consume_token_type(punct(PunctuationId::LAngle))
            && tokens.current_token_value().contains(&closing)
        {
            return true;
        }
        tokens.next();
    }
    false
}

/// `array{` with no whitespace between the name and the brace. The name match is case-sensitive.
fn at_array_shape(tokens: &TokenIterator, ident: &IdentifierTypeNode) -> bool {
    ident.name == keywords::as_str(KeywordId::Array)
        && tokens.is_current_token_type(punct(PunctuationId::LBrace))
        && !tokens.is_preceded_by_horizontal_whitespace()
}
