/// Callable signatures: `callable(int, string=): bool`, `Closure(Foo &...$rest): void`.
///
/// ## Notes
/// - A callable is only ever attempted speculatively; any grammar mismatch rolls back to the `(` and leaves the
///   bare identifier.
/// - A `[]` suffix after the return type belongs to the return type.
impl TypeParser {
    fn try_parse_callable(
        &self,
        tokens: &mut TokenIterator,
        identifier: IdentifierTypeNode,
        depth: usize,
    ) -> Result<TypeNode, ParseError> {
        tokens.push_save_point();
        match self.parse_callable(tokens, identifier.clone(), depth) {
            Ok(ty) => {
                tokens.drop_save_point();
                Ok(ty)
            }
            Err(err) => {
                tokens.rollback();
                if !err.is_recoverable() {
                    return Err(err);
                }
                tracing::trace!(offset = err.offset(), "callable attempt rolled back");
                Ok(TypeNode::Identifier(identifier))
            }
        }
    }

    fn parse_callable(
        &self,
        tokens: &mut TokenIterator,
        identifier: IdentifierTypeNode,
        depth: usize,
    ) -> Result<TypeNode, ParseError> {
        tokens.consume_token_type(punct(PunctuationId::LParen))?;
        let mut parameters = Vec::new();
        if !tokens.is_current_token_type(punct(PunctuationId::RParen)) {
            parameters.push(self.parse_callable_parameter(tokens, depth)?);
            while tokens.try_consume_token_type(punct(PunctuationId::Comma)) {
                parameters.push(self.parse_callable_parameter(tokens, depth)?);
            }
        }
        tokens.consume_token_type(punct(PunctuationId::RParen))?;
        tokens.consume_token_type(punct(PunctuationId::Colon))?;
        let return_type = self.parse_callable_return_type(tokens, depth)?;

        Ok(TypeNode::Callable(CallableTypeNode {
            identifier,
            parameters,
            return_type: Box::new(return_type),
        }))
    }

    fn parse_callable_parameter(
        &self,
        tokens: &mut TokenIterator,
        depth: usize,
    ) -> Result<CallableTypeParameterNode, ParseError> {
        let ty = self.parse_type_at(tokens, depth + 1)?;
        let is_reference = tokens.try_consume_token_type(TokenKind::Reference);
        let is_variadic = tokens.try_consume_token_type(punct(PunctuationId::Ellipsis));
        let parameter_name = if tokens.is_current_token_type(TokenKind::Variable) {
            let name = tokens.current_token_value().to_string();
            tokens.next();
            name
        } else {
            String::new()
        };
        let is_optional = tokens.try_consume_token_type(punct(PunctuationId::Equal));

        Ok(CallableTypeParameterNode {
            ty,
            is_reference,
            is_variadic,
            parameter_name,
            is_optional,
        })
    }

    /// Return types are narrower than full types: a nullable, a parenthesized type, or a name with optional
    /// generics or shape body.
    fn parse_callable_return_type(&self, tokens: &mut TokenIterator, depth: usize) -> Result<TypeNode, ParseError> {
        let ty = if tokens.is_current_token_type(punct(PunctuationId::Question)) {
            self.parse_nullable(tokens, depth)?
        } else if tokens.try_consume_token_type(punct(PunctuationId::LParen)) {
            let ty = self.parse_type_at(tokens, depth + 1)?;
            tokens.consume_token_type(punct(PunctuationId::RParen))?;
            ty
        } else {
            let ident = IdentifierTypeNode::new(tokens.current_token_value());
            tokens.consume_token_type(TokenKind::Identifier)?;
            if tokens.is_current_token_type(punct(PunctuationId::LAngle)) {
                self.parse_generic(tokens, ident, depth)?
            } else if at_array_shape(tokens, &ident) {
                self.parse_array_shape(tokens, depth)?
            } else {
                TypeNode::Identifier(ident)
            }
        };
        Ok(self.try_parse_array(tokens, ty))
    }
}
