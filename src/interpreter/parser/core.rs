use std::iter::Peekable;

use crate::{
    ast::ExpressionNode,
    error::Error,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::factor::parse_factor,
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// Parses a full line of tokens into top-level expression trees.
///
/// A well-formed line holds one expression and yields one tree. A line with
/// consecutive expressions and no operator between them (e.g. `1 2`) still
/// terminates: each call to [`parse_expression`] consumes at least one token,
/// so the loop reaches [`TokenKind::EndOfInput`] and returns every node it
/// accumulated. Deciding whether adjacent values are an error is the
/// evaluator's job, not the parser's.
///
/// # Parameters
/// - `tokens`: The token sequence produced by `tokenize`, terminator
///   included.
///
/// # Returns
/// The accumulated top-level nodes; empty for a line with no tokens.
///
/// # Errors
/// Propagates the first parse error; no partial tree survives a failure.
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<ExpressionNode>> {
    let mut iter = tokens.iter().peekable();
    let mut nodes = Vec::new();

    while let Some(token) = iter.peek()
          && !matches!(token.kind, TokenKind::EndOfInput)
    {
        nodes.push(parse_expression(&mut iter)?);
    }

    Ok(nodes)
}

/// Parses an expression at the lowest precedence level.
///
/// Handles left-associative binary operators `+` and `-`:
/// `1 - 2 - 3` parses as `(1 - 2) - 3`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`ExpressionNode::Binary`] tree, or a single term.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExpressionNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Plus | TokenKind::Minus)
        {
            let operator = (*token).clone();
            tokens.next();
            let right = parse_term(tokens)?;
            left = ExpressionNode::Binary { left: Box::new(left),
                                            operator,
                                            right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative `*` and `/` over power-level operands.
///
/// The rule is: `term := power (("*" | "/") power)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExpressionNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_power(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Mul | TokenKind::Div)
        {
            let operator = (*token).clone();
            tokens.next();
            let right = parse_power(tokens)?;
            left = ExpressionNode::Binary { left: Box::new(left),
                                            operator,
                                            right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative, the standard convention: `2 ^ 3 ^ 2` parses as
/// `2 ^ (3 ^ 2)`.
///
/// The rule is: `power := factor ("^" power)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation tree, or a single factor.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExpressionNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_factor(tokens)?;
    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::Pow)
    {
        let operator = (*token).clone();
        tokens.next();
        let exponent = parse_power(tokens)?;
        return Ok(ExpressionNode::Binary { left: Box::new(base),
                                           operator,
                                           right: Box::new(exponent), });
    }
    Ok(base)
}
