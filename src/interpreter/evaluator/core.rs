use crate::{
    ast::{ExpressionNode, Literal},
    error::{Error, ErrorKind},
    interpreter::{evaluator::binary::apply_binary, lexer::Token, value::NumericResult},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Error`] describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates one expression tree.
///
/// The walk is a left-to-right fold: groups are transparent (parentheses
/// affect order, never the result shape), binary nodes evaluate both
/// operands and apply the operator under the promotion rule, and keyword
/// calls evaluate their argument but yield nothing because the keyword
/// itself is inert.
///
/// # Parameters
/// - `node`: The tree to reduce.
///
/// # Returns
/// `Some(NumericResult)` for value-producing nodes, `None` for keyword
/// calls.
///
/// # Errors
/// - [`ErrorKind::NotANumber`] for a non-numeric leaf in arithmetic
///   position.
/// - Any error raised by the applied operator (division by zero, overflow).
pub fn evaluate(node: &ExpressionNode) -> EvalResult<Option<NumericResult>> {
    match node {
        ExpressionNode::Leaf(token) => evaluate_leaf(token).map(Some),
        ExpressionNode::Group { inner: Some(inner), .. } => evaluate(inner),
        // The empty pair `()` reduces to integer zero. Documented sentinel,
        // not an error.
        ExpressionNode::Group { inner: None, .. } => Ok(Some(NumericResult::Int(0))),
        ExpressionNode::Binary { left, operator, right } => {
            let lhs = require_value(left)?;
            let rhs = require_value(right)?;
            apply_binary(operator, lhs, rhs).map(Some)
        },
        ExpressionNode::KeywordCall { argument, .. } => {
            evaluate(argument)?;
            Ok(None)
        },
    }
}

/// Evaluates a line's top-level nodes to at most one value.
///
/// # Parameters
/// - `nodes`: The trees produced by one parse of one line.
///
/// # Returns
/// The single value the line reduces to, or `None` when nothing produced a
/// value (blank line, or only inert keyword calls).
///
/// # Errors
/// [`ErrorKind::MissingOperator`] when two nodes both produce values; the
/// span points at the second one.
pub fn evaluate_sequence(nodes: &[ExpressionNode]) -> EvalResult<Option<NumericResult>> {
    let mut result = None;

    for node in nodes {
        let Some(value) = evaluate(node)? else {
            continue;
        };
        if result.is_some() {
            let (start, end) = node.span();
            return Err(Error::new(ErrorKind::MissingOperator,
                                  start,
                                  end,
                                  "two values with no operator between them"));
        }
        result = Some(value);
    }

    Ok(result)
}

/// Evaluates a leaf token to its numeric value.
///
/// Only `Int` and `Float` literals are numbers. Strings, chars, booleans,
/// identifiers (no variable store exists), type names, and bare keywords
/// all fail here.
fn evaluate_leaf(token: &Token) -> EvalResult<NumericResult> {
    match token.literal() {
        Some(Literal::IntValue(v)) => Ok(NumericResult::Int(v)),
        Some(Literal::FloatValue(v)) => Ok(NumericResult::Float(v)),
        _ => {
            Err(Error::at_token(ErrorKind::NotANumber,
                                token,
                                format!("'{token}' is not a number")))
        },
    }
}

/// Evaluates an operand that must produce a value.
///
/// A keyword call in operand position has nothing to contribute to
/// arithmetic, so it is rejected rather than silently skipped.
fn require_value(node: &ExpressionNode) -> EvalResult<NumericResult> {
    match evaluate(node)? {
        Some(value) => Ok(value),
        None => {
            let (start, end) = node.span();
            Err(Error::new(ErrorKind::NotANumber,
                           start,
                           end,
                           "expression produces no value"))
        },
    }
}
