use std::iter::Peekable;

use crate::{
    ast::ExpressionNode,
    error::{Error, ErrorKind},
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a factor, the highest-precedence unit of the grammar.
///
/// Grammar:
/// ```text
///     factor := "-" numeric-literal
///             | literal | identifier | type
///             | "(" expr ")"
///             | "(" ")"
///             | keyword "(" expr ")"
///             | keyword
/// ```
/// A `-` is only negation here, in factor position, where no left operand
/// exists yet; a `-` after a bound left operand never reaches this function
/// because the additive level consumes it as subtraction first. That left
/// context is the entire unary/binary disambiguation rule.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// [`ErrorKind::InvalidSyntax`] for any token that cannot start a factor,
/// including the end-of-input terminator.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExpressionNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek() else {
        return Err(Error::new(ErrorKind::InvalidSyntax,
                              Position::default(),
                              Position::default(),
                              "unexpected end of input"));
    };

    match &token.kind {
        TokenKind::Minus => parse_negated_literal(tokens),
        TokenKind::Int(_)
        | TokenKind::Float(_)
        | TokenKind::String(_)
        | TokenKind::Char(_)
        | TokenKind::Bool(_)
        | TokenKind::Identifier(_)
        | TokenKind::Type(_) => {
            let token = tokens.next().unwrap().clone();
            Ok(ExpressionNode::Leaf(token))
        },
        TokenKind::LParen => parse_group(tokens),
        TokenKind::Keyword(_) => parse_keyword_call(tokens),
        TokenKind::EndOfInput => {
            Err(Error::at_token(ErrorKind::InvalidSyntax, token, "unexpected end of input"))
        },
        _ => {
            Err(Error::at_token(ErrorKind::InvalidSyntax,
                                token,
                                format!("\"{token}\" is invalid here")))
        },
    }
}

/// Parses a unary minus applied to a numeric literal.
///
/// The literal's value is negated in place: the resulting leaf carries the
/// negated payload and a span that starts at the minus, so `-2` folds into
/// further arithmetic exactly like a literal `-2` would.
fn parse_negated_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExpressionNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let minus = tokens.next().unwrap().clone();

    match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::Int(_) | TokenKind::Float(_)) => {
            let literal = tokens.next().unwrap();
            let kind = match &literal.kind {
                TokenKind::Int(v) => TokenKind::Int(-v),
                TokenKind::Float(v) => TokenKind::Float(-v),
                _ => unreachable!(),
            };
            Ok(ExpressionNode::Leaf(Token::new(kind, minus.start, literal.end)))
        },
        _ => {
            Err(Error::at_token(ErrorKind::InvalidSyntax,
                                &minus,
                                "'-' here must be followed by a numeric literal"))
        },
    }
}

/// Parses a parenthesized group.
///
/// Expected forms: `( expr )` or the empty pair `( )`. The `(` and `)`
/// tokens stay on the node so its span covers the full parenthesized text.
///
/// # Errors
/// [`ErrorKind::ExpectedToken`] at the current position when the closing
/// `)` is missing.
fn parse_group<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExpressionNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = tokens.next().unwrap().clone();

    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::RParen)
    {
        let close = tokens.next().unwrap().clone();
        return Ok(ExpressionNode::Group { open,
                                          inner: None,
                                          close });
    }

    let inner = parse_expression(tokens)?;
    match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::RParen) => {
            let close = tokens.next().unwrap().clone();
            Ok(ExpressionNode::Group { open,
                                       inner: Some(Box::new(inner)),
                                       close })
        },
        Some(token) => Err(Error::at_token(ErrorKind::ExpectedToken, token, "expected ')'")),
        None => Err(Error::at_token(ErrorKind::ExpectedToken, &open, "expected ')'")),
    }
}

/// Parses a keyword in factor position.
///
/// A keyword followed by `(` becomes a [`ExpressionNode::KeywordCall`] with
/// a single parenthesized argument; the argument must be a non-empty
/// expression. A keyword not followed by `(` stands alone as a leaf (it has
/// no value and fails later if used arithmetically).
///
/// # Errors
/// - [`ErrorKind::InvalidSyntax`] when the parenthesized argument is empty
///   or malformed.
/// - [`ErrorKind::ExpectedToken`] when the closing `)` is missing.
fn parse_keyword_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExpressionNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = tokens.next().unwrap().clone();

    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::LParen)
    {
        let open = tokens.next().unwrap().clone();
        let inner = parse_expression(tokens)?;
        return match tokens.peek() {
            Some(token) if matches!(token.kind, TokenKind::RParen) => {
                let close = tokens.next().unwrap().clone();
                let argument = ExpressionNode::Group { open,
                                                       inner: Some(Box::new(inner)),
                                                       close };
                Ok(ExpressionNode::KeywordCall { keyword,
                                                 argument: Box::new(argument), })
            },
            Some(token) => Err(Error::at_token(ErrorKind::ExpectedToken, token, "expected ')'")),
            None => Err(Error::at_token(ErrorKind::ExpectedToken, &open, "expected ')'")),
        };
    }

    Ok(ExpressionNode::Leaf(keyword))
}
