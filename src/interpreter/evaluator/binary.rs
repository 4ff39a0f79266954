use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenKind},
        value::NumericResult,
    },
    util::num::i64_to_u32_checked,
};

/// Applies a binary arithmetic operator to two evaluated operands.
///
/// Type promotion: if either operand is `Float`, the result is `Float`;
/// otherwise `Int`. Division ignores that rule and always performs true
/// division, so `4 / 2` is `2.0` rather than `2`. Integer addition,
/// subtraction, and multiplication use checked arithmetic.
///
/// # Parameters
/// - `operator`: The operator token, kept for error spans. One of
///   `+ - * / ^`; the parser builds `Binary` nodes for nothing else.
/// - `lhs`: Evaluated left operand.
/// - `rhs`: Evaluated right operand.
///
/// # Returns
/// The combined value.
///
/// # Errors
/// - [`ErrorKind::DivisionByZero`] when the right operand of `/` is zero,
///   pointing at the `/` token.
/// - [`ErrorKind::Overflow`] when an integer result does not fit.
pub fn apply_binary(operator: &Token,
                    lhs: NumericResult,
                    rhs: NumericResult)
                    -> EvalResult<NumericResult> {
    use NumericResult::{Float, Int};

    match &operator.kind {
        TokenKind::Plus => match (lhs, rhs) {
            (Int(a), Int(b)) => a.checked_add(b).map(Int).ok_or_else(|| overflow(operator)),
            (a, b) => Ok(Float(a.as_float(operator)? + b.as_float(operator)?)),
        },
        TokenKind::Minus => match (lhs, rhs) {
            (Int(a), Int(b)) => a.checked_sub(b).map(Int).ok_or_else(|| overflow(operator)),
            (a, b) => Ok(Float(a.as_float(operator)? - b.as_float(operator)?)),
        },
        TokenKind::Mul => match (lhs, rhs) {
            (Int(a), Int(b)) => a.checked_mul(b).map(Int).ok_or_else(|| overflow(operator)),
            (a, b) => Ok(Float(a.as_float(operator)? * b.as_float(operator)?)),
        },
        TokenKind::Div => {
            if rhs.is_zero() {
                return Err(Error::at_token(ErrorKind::DivisionByZero,
                                           operator,
                                           "division by zero"));
            }
            Ok(Float(lhs.as_float(operator)? / rhs.as_float(operator)?))
        },
        TokenKind::Pow => apply_pow(operator, lhs, rhs),
        _ => unreachable!(),
    }
}

/// Applies the `^` operator.
///
/// Integer base and non-negative integer exponent stay in integer
/// arithmetic with `checked_pow`. A negative integer exponent, or any float
/// operand, computes in floating point with `powf`.
fn apply_pow(operator: &Token,
             base: NumericResult,
             exponent: NumericResult)
             -> EvalResult<NumericResult> {
    use NumericResult::{Float, Int};

    match (base, exponent) {
        (Int(b), Int(e)) if e >= 0 => {
            let e = i64_to_u32_checked(e, overflow(operator))?;
            b.checked_pow(e).map(Int).ok_or_else(|| overflow(operator))
        },
        (b, e) => Ok(Float(b.as_float(operator)?.powf(e.as_float(operator)?))),
    }
}

fn overflow(operator: &Token) -> Error {
    Error::at_token(ErrorKind::Overflow,
                    operator,
                    "integer overflow while trying to compute result")
}
