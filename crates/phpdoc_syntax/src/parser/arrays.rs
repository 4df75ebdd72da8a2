/// Array syntax: `T[]` suffixes and `array{...}` shapes.
impl TypeParser {
    /// Wrap `ty` in one array per `[]` pair. A `[` not directly closed by `]` is left unconsumed.
    fn try_parse_array(&self, tokens: &mut TokenIterator, mut ty: TypeNode) -> TypeNode {
        while tokens.is_current_token_type(punct(PunctuationId::LBracket)) {
            tokens.push_save_point();
            tokens.next();
            if !tokens.try_consume_token_type(punct(PunctuationId::RBracket)) {
                tokens.rollback();
                tracing::trace!(offset = tokens.current_token_offset(), "array suffix attempt rolled back");
                break;
            }
            tokens.drop_save_point();
            ty = TypeNode::array(ty);
        }
        ty
    }

    fn parse_array_shape(&self, tokens: &mut TokenIterator, depth: usize) -> Result<TypeNode, ParseError> {
        tokens.consume_token_type(punct(PunctuationId::LBrace))?;
        if tokens.try_consume_token_type(punct(PunctuationId::RBrace)) {
            return Ok(TypeNode::ArrayShape(ArrayShapeNode::default()));
        }

        tokens.try_consume_token_type(TokenKind::PhpDocEol);
        let mut items = vec![self.parse_array_shape_item(tokens, depth)?];
        tokens.try_consume_token_type(TokenKind::PhpDocEol);

        while tokens.try_consume_token_type(punct(PunctuationId::Comma)) {
            tokens.try_consume_token_type(TokenKind::PhpDocEol);
            if tokens.try_consume_token_type(punct(PunctuationId::RBrace)) {
                // trailing comma
                return Ok(TypeNode::ArrayShape(ArrayShapeNode { items }));
            }
            items.push(self.parse_array_shape_item(tokens, depth)?);
            tokens.try_consume_token_type(TokenKind::PhpDocEol);
        }

        tokens.try_consume_token_type(TokenKind::PhpDocEol);
        tokens.consume_token_type(punct(PunctuationId::RBrace))?;
        Ok(TypeNode::ArrayShape(ArrayShapeNode { items }))
    }

    /// `key: T`, `key?: T`, or a positional `T`. The keyed form is tried first.
    fn parse_array_shape_item(
        &self,
        tokens: &mut TokenIterator,
        depth: usize,
    ) -> Result<ArrayShapeItemNode, ParseError> {
        tokens.push_save_point();
        match self.parse_keyed_array_shape_item(tokens, depth) {
            Ok(item) => {
                tokens.drop_save_point();
                Ok(item)
            }
            Err(err) => {
                tokens.rollback();
                if !err.is_recoverable() {
                    return Err(err);
                }
                tracing::trace!(offset = err.offset(), "keyed shape item rolled back");
                let value = self.parse_type_at(tokens, depth + 1)?;
                Ok(ArrayShapeItemNode {
                    key: None,
                    optional: false,
                    value,
                })
            }
        }
    }

    fn parse_keyed_array_shape_item(
        &self,
        tokens: &mut TokenIterator,
        depth: usize,
    ) -> Result<ArrayShapeItemNode, ParseError> {
        let key = parse_array_shape_key(tokens)?;
        let optional = tokens.try_consume_token_type(punct(PunctuationId::Question));
        tokens.consume_token_type(punct(PunctuationId::Colon))?;
        let value = self.parse_type_at(tokens, depth + 1)?;
        Ok(ArrayShapeItemNode {
            key: Some(key),
            optional,
            value,
        })
    }
}

fn parse_array_shape_key(tokens: &mut TokenIterator) -> Result<ArrayShapeKey, ParseError> {
    let token: Token = tokens.current_token().clone();
    let key = match token.kind {
        TokenKind::Integer => ArrayShapeKey::Integer(token.value),
        TokenKind::SingleQuotedString => {
            ArrayShapeKey::String(StringLiteral::from_token_value(&token.value, QuoteStyle::Single))
        }
        TokenKind::DoubleQuotedString => {
            ArrayShapeKey::String(StringLiteral::from_token_value(&token.value, QuoteStyle::Double))
        }
        _ => {
            tokens.consume_token_type(TokenKind::Identifier)?;
            return Ok(ArrayShapeKey::Identifier(IdentifierTypeNode::new(token.value)));
        }
    };
    tokens.next();
    Ok(key)
}
