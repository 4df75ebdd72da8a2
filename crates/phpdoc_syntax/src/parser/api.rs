/// Parse a complete token stream as one type expression, with PHP constant types enabled.
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns a [`ParseError`] if the tokens do not form a type, or if anything but the end of input follows it.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_type(tokens: Vec<Token>) -> Result<TypeNode, ParseError> {
    parse_type_with(&TypeParser::with_php_constants(), tokens)
}

/// Like [`parse_type`], with a caller-supplied parser.
pub fn parse_type_with(parser: &TypeParser, tokens: Vec<Token>) -> Result<TypeNode, ParseError> {
    let mut tokens = TokenIterator::new(tokens);
    let ty = parser.parse(&mut tokens)?;
    tokens.consume_token_type(TokenKind::End)?;
    debug_assert_eq!(tokens.save_point_depth(), 0, "unbalanced save points after parse");
    Ok(ty)
}
