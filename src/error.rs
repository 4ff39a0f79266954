use crate::interpreter::lexer::{Position, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classifies every failure the pipeline can produce.
///
/// The first two kinds are raised while tokenizing, the next two while
/// parsing, and the rest while evaluating. No stage reuses a kind that
/// belongs to another stage, so the kind alone tells you where a line went
/// wrong.
pub enum ErrorKind {
    /// A character the lexer has no rule for.
    IllegalCharacter,
    /// A quoted literal that is never closed.
    UnterminatedQuote,
    /// A specific token was required but something else was found.
    ExpectedToken,
    /// A token that cannot start or continue an expression.
    InvalidSyntax,
    /// A non-numeric leaf was used in arithmetic position.
    NotANumber,
    /// Two values appeared with no operator between them.
    MissingOperator,
    /// The right operand of `/` was zero.
    DivisionByZero,
    /// A result or conversion does not fit the target numeric type.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::IllegalCharacter => "Illegal Character",
            Self::UnterminatedQuote => "Unterminated Quote",
            Self::ExpectedToken => "Expected Token",
            Self::InvalidSyntax => "Invalid Syntax",
            Self::NotANumber => "Not A Number",
            Self::MissingOperator => "Missing Operator",
            Self::DivisionByZero => "Division By Zero",
            Self::Overflow => "Overflow",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A failure scoped to a single input line.
///
/// Every error carries the span of source text it points at, so the driver
/// can render diagnostics without re-deriving positions. Errors are terminal
/// for the line that produced them; nothing in the pipeline retries or
/// recovers.
pub struct Error {
    /// Which failure this is.
    pub kind:    ErrorKind,
    /// Start of the offending source span.
    pub start:   Position,
    /// End of the offending source span (exclusive).
    pub end:     Position,
    /// Human-readable details, e.g. the offending character or token.
    pub message: String,
}

impl Error {
    /// Creates an error over an explicit source span.
    pub fn new(kind: ErrorKind,
               start: Position,
               end: Position,
               message: impl Into<String>)
               -> Self {
        Self { kind,
               start,
               end,
               message: message.into() }
    }

    /// Creates an error whose span is exactly one token.
    ///
    /// Used wherever a single token is to blame, like the `/` of a division
    /// by zero.
    pub fn at_token(kind: ErrorKind, token: &Token, message: impl Into<String>) -> Self {
        Self::new(kind, token.start, token.end, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}
