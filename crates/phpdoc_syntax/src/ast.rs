//! Abstract Syntax Tree definitions for PHPDoc types
//!
//! Every node is an immutable value that owns its children. `Display` renders the canonical textual form; that
//! form reparses to a structurally equal tree, which is why a few positions add parentheses the input may not
//! have had (see [`TypeNode`]).

use std::fmt;

use phpdoc_core::lang::keywords::{self, KeywordId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Literals
// ============================================================================

/// Quote style of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Single,
    Double,
}

impl QuoteStyle {
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// A quoted string as written, without its delimiters. Escape sequences are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub quote: QuoteStyle,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>, quote: QuoteStyle) -> Self {
        Self {
            value: value.into(),
            quote,
        }
    }

    /// Build from a raw string token, stripping one quote character from each end.
    pub fn from_token_value(raw: &str, quote: QuoteStyle) -> Self {
        let q = quote.quote_char();
        let inner = raw
            .strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
            .unwrap_or(raw);
        Self::new(inner, quote)
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.quote.quote_char();
        write!(f, "{q}{}{q}", self.value)
    }
}

// ============================================================================
// Type nodes
// ============================================================================

/// A type expression.
///
/// ## Notes
/// - Union and intersection always hold at least two members; generics at least one argument.
/// - Rendering parenthesizes an array element that is nullable, callable or const, a union/intersection
///   member that is nullable, and a callable return type that is `$this`, const or callable. Without the
///   parentheses those renderings would parse back into a different tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Identifier(IdentifierTypeNode),
    /// `$this`
    This,
    Nullable(Box<TypeNode>),
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    Generic(GenericTypeNode),
    /// `T[]`
    Array(Box<TypeNode>),
    ArrayShape(ArrayShapeNode),
    Callable(CallableTypeNode),
    Const(ConstExpr),
}

impl TypeNode {
    pub fn identifier(name: impl Into<String>) -> Self {
        TypeNode::Identifier(IdentifierTypeNode::new(name))
    }

    pub fn nullable(inner: TypeNode) -> Self {
        TypeNode::Nullable(Box::new(inner))
    }

    pub fn array(inner: TypeNode) -> Self {
        TypeNode::Array(Box::new(inner))
    }

    pub fn generic(base: impl Into<String>, args: Vec<TypeNode>) -> Self {
        TypeNode::Generic(GenericTypeNode {
            base: IdentifierTypeNode::new(base),
            args,
        })
    }

    fn starts_with_this(&self) -> bool {
        match self {
            TypeNode::This => true,
            TypeNode::Array(inner) => inner.starts_with_this(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierTypeNode {
    pub name: String,
}

impl IdentifierTypeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTypeNode {
    pub base: IdentifierTypeNode,
    pub args: Vec<TypeNode>,
}

/// `array{...}`; items may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayShapeNode {
    pub items: Vec<ArrayShapeItemNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayShapeItemNode {
    pub key: Option<ArrayShapeKey>,
    pub optional: bool,
    pub value: TypeNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayShapeKey {
    Integer(String),
    String(StringLiteral),
    Identifier(IdentifierTypeNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableTypeNode {
    pub identifier: IdentifierTypeNode,
    pub parameters: Vec<CallableTypeParameterNode>,
    pub return_type: Box<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableTypeParameterNode {
    pub ty: TypeNode,
    pub is_reference: bool,
    pub is_variadic: bool,
    /// Includes the leading `$`; empty when the parameter is unnamed.
    pub parameter_name: String,
    pub is_optional: bool,
}

// ============================================================================
// Constant expressions
// ============================================================================

/// A constant expression in type position (`Foo::BAR`, `'literal'`, `42`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstExpr {
    Integer(String),
    Float(String),
    String(StringLiteral),
    True,
    False,
    Null,
    /// `class_name::name`, or a global constant when `class_name` is empty. `name` may contain a `*` wildcard.
    ConstFetch { class_name: String, name: String },
    Array(Vec<ConstExprArrayItem>),
}

impl ConstExpr {
    /// Array literals are constant expressions but never valid bare types.
    pub fn is_array(&self) -> bool {
        matches!(self, ConstExpr::Array(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstExprArrayItem {
    pub key: Option<ConstExpr>,
    pub value: ConstExpr,
}

// ============================================================================
// Rendering
// ============================================================================

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_members(f: &mut fmt::Formatter<'_>, members: &[TypeNode], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        // `& .5` would lex as a by-reference marker
        match member {
            TypeNode::Nullable(_) => write!(f, "({member})")?,
            TypeNode::Const(ConstExpr::Float(value)) if value.starts_with('.') => write!(f, "({member})")?,
            _ => write!(f, "{member}")?,
        }
    }
    f.write_str(")")
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Identifier(ident) => write!(f, "{ident}"),
            TypeNode::This => f.write_str("$this"),
            TypeNode::Nullable(inner) => write!(f, "?{inner}"),
            TypeNode::Union(members) => write_members(f, members, " | "),
            TypeNode::Intersection(members) => write_members(f, members, " & "),
            TypeNode::Generic(generic) => write!(f, "{generic}"),
            TypeNode::Array(inner) => match inner.as_ref() {
                TypeNode::Nullable(_) | TypeNode::Callable(_) | TypeNode::Const(_) => write!(f, "({inner})[]"),
                _ => write!(f, "{inner}[]"),
            },
            TypeNode::ArrayShape(shape) => write!(f, "{shape}"),
            TypeNode::Callable(callable) => write!(f, "{callable}"),
            TypeNode::Const(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for IdentifierTypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for GenericTypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.base)?;
        write_joined(f, &self.args, ", ")?;
        f.write_str(">")
    }
}

impl fmt::Display for ArrayShapeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("array{")?;
        write_joined(f, &self.items, ", ")?;
        f.write_str("}")
    }
}

impl fmt::Display for ArrayShapeItemNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => {
                let optional = if self.optional { "?" } else { "" };
                write!(f, "{key}{optional}: {}", self.value)
            }
            None => write!(f, "{}", self.value),
        }
    }
}

impl fmt::Display for ArrayShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayShapeKey::Integer(value) => f.write_str(value),
            ArrayShapeKey::String(literal) => write!(f, "{literal}"),
            ArrayShapeKey::Identifier(ident) => write!(f, "{ident}"),
        }
    }
}

impl fmt::Display for CallableTypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.identifier)?;
        write_joined(f, &self.parameters, ", ")?;
        f.write_str("): ")?;
        let ret = self.return_type.as_ref();
        if matches!(ret, TypeNode::Const(_) | TypeNode::Callable(_)) || ret.starts_with_this() {
            write!(f, "({ret})")
        } else {
            write!(f, "{ret}")
        }
    }
}

impl fmt::Display for CallableTypeParameterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference = if self.is_reference { "&" } else { "" };
        let variadic = if self.is_variadic { "..." } else { "" };
        let rendered = format!("{} {reference}{variadic}{}", self.ty, self.parameter_name);
        f.write_str(rendered.trim())?;
        if self.is_optional {
            f.write_str("=")?;
        }
        Ok(())
    }
}

impl fmt::Display for ConstExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstExpr::Integer(value) | ConstExpr::Float(value) => f.write_str(value),
            ConstExpr::String(literal) => write!(f, "{literal}"),
            ConstExpr::True => f.write_str(keywords::as_str(KeywordId::True)),
            ConstExpr::False => f.write_str(keywords::as_str(KeywordId::False)),
            ConstExpr::Null => f.write_str(keywords::as_str(KeywordId::Null)),
            ConstExpr::ConstFetch { class_name, name } if class_name.is_empty() => f.write_str(name),
            ConstExpr::ConstFetch { class_name, name } => write!(f, "{class_name}::{name}"),
            ConstExpr::Array(items) => {
                f.write_str("[")?;
                write_joined(f, items, ", ")?;
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for ConstExprArrayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{key} => {}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_renders_parenthesized() {
        let ty = TypeNode::Union(vec![TypeNode::identifier("int"), TypeNode::identifier("string")]);
        insta::assert_snapshot!(ty.to_string(), @"(int | string)");
    }

    #[test]
    fn test_leading_dot_float_member_is_parenthesized() {
        let half = TypeNode::Const(ConstExpr::Float(".5".to_string()));
        let ty = TypeNode::Intersection(vec![TypeNode::identifier("A"), half]);
        insta::assert_snapshot!(ty.to_string(), @"(A & (.5))");
        let ty = TypeNode::Union(vec![TypeNode::Const(ConstExpr::Float("0.5".to_string())), TypeNode::This]);
        insta::assert_snapshot!(ty.to_string(), @"(0.5 | $this)");
    }

    #[test]
    fn test_array_of_nullable_is_parenthesized() {
        let ty = TypeNode::array(TypeNode::nullable(TypeNode::identifier("Foo")));
        insta::assert_snapshot!(ty.to_string(), @"(?Foo)[]");
        let ty = TypeNode::nullable(TypeNode::array(TypeNode::identifier("Foo")));
        insta::assert_snapshot!(ty.to_string(), @"?Foo[]");
    }

    #[test]
    fn test_nullable_union_member_is_parenthesized() {
        let ty = TypeNode::Intersection(vec![TypeNode::nullable(TypeNode::identifier("A")), TypeNode::identifier("B")]);
        insta::assert_snapshot!(ty.to_string(), @"((?A) & B)");
    }

    #[test]
    fn test_shape_rendering_keeps_key_quotes() {
        let shape = TypeNode::ArrayShape(ArrayShapeNode {
            items: vec![
                ArrayShapeItemNode {
                    key: Some(ArrayShapeKey::String(StringLiteral::new("full name", QuoteStyle::Single))),
                    optional: false,
                    value: TypeNode::identifier("string"),
                },
                ArrayShapeItemNode {
                    key: Some(ArrayShapeKey::Integer("0".to_string())),
                    optional: true,
                    value: TypeNode::identifier("int"),
                },
                ArrayShapeItemNode {
                    key: None,
                    optional: false,
                    value: TypeNode::This,
                },
            ],
        });
        insta::assert_snapshot!(shape.to_string(), @"array{'full name': string, 0?: int, $this}");
    }

    #[test]
    fn test_callable_parameters_render_markers() {
        let callable = TypeNode::Callable(CallableTypeNode {
            identifier: IdentifierTypeNode::new("callable"),
            parameters: vec![
                CallableTypeParameterNode {
                    ty: TypeNode::identifier("int"),
                    is_reference: false,
                    is_variadic: false,
                    parameter_name: String::new(),
                    is_optional: false,
                },
                CallableTypeParameterNode {
                    ty: TypeNode::identifier("string"),
                    is_reference: true,
                    is_variadic: true,
                    parameter_name: "$rest".to_string(),
                    is_optional: true,
                },
            ],
            return_type: Box::new(TypeNode::This),
        });
        insta::assert_snapshot!(callable.to_string(), @"callable(int, string &...$rest=): ($this)");
    }

    #[test]
    fn test_const_expr_rendering() {
        let expr = ConstExpr::Array(vec![
            ConstExprArrayItem {
                key: Some(ConstExpr::String(StringLiteral::new("a", QuoteStyle::Double))),
                value: ConstExpr::Integer("1".to_string()),
            },
            ConstExprArrayItem {
                key: None,
                value: ConstExpr::ConstFetch {
                    class_name: "Foo".to_string(),
                    name: "BAR_*".to_string(),
                },
            },
            ConstExprArrayItem {
                key: None,
                value: ConstExpr::Null,
            },
        ]);
        insta::assert_snapshot!(expr.to_string(), @r#"["a" => 1, Foo::BAR_*, null]"#);
        assert!(expr.is_array());
        assert!(!ConstExpr::True.is_array());
    }

    #[test]
    fn test_string_literal_strips_delimiters() {
        let literal = StringLiteral::from_token_value("'it\\'s'", QuoteStyle::Single);
        assert_eq!(literal.value, "it\\'s");
        assert_eq!(literal.to_string(), "'it\\'s'");
    }
}
