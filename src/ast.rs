use crate::interpreter::lexer::{Position, Token};

/// Represents a literal value carried by a token.
///
/// `Literal` covers the raw constants that can appear directly in source
/// text, plus identifier names, which travel the same way even though they
/// have no bound value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A 64-bit signed integer literal.
    IntValue(i64),
    /// A 64-bit floating-point literal.
    FloatValue(f64),
    /// A quoted literal of any length other than one rune.
    StringValue(String),
    /// A quoted literal holding exactly one rune.
    CharValue(char),
    /// A boolean literal: `true` or `false`.
    BoolValue(bool),
    /// An identifier name.
    IdentifierName(String),
}

/// A node of the expression tree built by the parser.
///
/// The tree is uniform and recursive: grouped sub-expressions are nodes like
/// any other, so no consumer ever has to ask whether an element is a token
/// or a nested structure. Every `Binary` node has both operands bound; the
/// parser never leaves an operator dangling.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    /// A literal, identifier, type name, or bare keyword standing alone.
    Leaf(Token),
    /// A binary operation. The operator token is kept whole so diagnostics
    /// can point at it.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token: one of `+ - * / ^`.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized sub-expression. Grouping preserves source order for
    /// error reporting; it never changes the inner value. `()` is valid and
    /// has no inner node.
    Group {
        /// The `(` token.
        open:  Token,
        /// The grouped expression, absent for the empty pair `()`.
        inner: Option<Box<Self>>,
        /// The `)` token.
        close: Token,
    },
    /// A keyword applied to a parenthesized argument, e.g. `write(1 + 2)`.
    /// Recognized syntactically only; the keyword itself is inert.
    KeywordCall {
        /// The keyword token.
        keyword:  Token,
        /// The parenthesized argument, always a [`ExpressionNode::Group`].
        argument: Box<Self>,
    },
}

impl ExpressionNode {
    /// Returns the source span this node covers.
    ///
    /// # Example
    /// ```
    /// use basix::parse_line;
    ///
    /// let nodes = parse_line("(1 + 2) * 3").unwrap();
    /// let (start, end) = nodes[0].span();
    /// assert_eq!(start.offset, 0);
    /// assert_eq!(end.offset, 11);
    /// ```
    #[must_use]
    pub fn span(&self) -> (Position, Position) {
        match self {
            Self::Leaf(token) => (token.start, token.end),
            Self::Binary { left, right, .. } => (left.span().0, right.span().1),
            Self::Group { open, close, .. } => (open.start, close.end),
            Self::KeywordCall { keyword, argument } => (keyword.start, argument.span().1),
        }
    }
}

impl std::fmt::Display for ExpressionNode {
    /// Renders the node back into source form. The printed form retokenizes
    /// to the same token kinds the node was built from.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(token) => write!(f, "{token}"),
            Self::Binary { left, operator, right } => write!(f, "{left} {operator} {right}"),
            Self::Group { inner: Some(inner), .. } => write!(f, "({inner})"),
            Self::Group { inner: None, .. } => write!(f, "()"),
            Self::KeywordCall { keyword, argument } => write!(f, "{keyword}{argument}"),
        }
    }
}
