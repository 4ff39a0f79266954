use crate::{
    error::{Error, ErrorKind},
    interpreter::{evaluator::core::EvalResult, lexer::Token},
    util::num::{format_real, i64_to_f64_checked},
};

/// Represents the numeric value an expression reduces to.
///
/// Results follow the promotion rule: an operation yields `Float` if either
/// operand was `Float`, otherwise `Int`. Division is the one exception, it
/// always yields `Float` (true division).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericResult {
    /// A 64-bit signed integer result.
    Int(i64),
    /// A 64-bit floating-point result.
    Float(f64),
}

impl From<i64> for NumericResult {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for NumericResult {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl NumericResult {
    /// Converts the result to `f64` for a mixed-type or dividing operation.
    ///
    /// Integer conversion is checked: a value too large to represent exactly
    /// in floating point is an overflow, reported at the operator token that
    /// forced the promotion.
    ///
    /// # Parameters
    /// - `at`: The operator token to blame if conversion is lossy.
    pub fn as_float(self, at: &Token) -> EvalResult<f64> {
        match self {
            Self::Float(v) => Ok(v),
            Self::Int(v) => {
                i64_to_f64_checked(v,
                                   Error::at_token(ErrorKind::Overflow,
                                                   at,
                                                   "integer is too large to represent in \
                                                    floating point"))
            },
        }
    }

    /// Returns `true` when the value is integer or float zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(v) => *v == 0,
            Self::Float(v) => *v == 0.0,
        }
    }
}

impl std::fmt::Display for NumericResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{}", format_real(*v)),
        }
    }
}
