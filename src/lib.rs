//! # basix
//!
//! basix is a small BASIC-flavored expression language interpreter written
//! in Rust. It tokenizes a line of source text, builds a precedence-correct
//! expression tree, and evaluates the tree to an integer or floating-point
//! result. Each input line is an independent, stateless unit of work.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::ExpressionNode,
    error::Error,
    interpreter::{evaluator::evaluate_sequence, lexer::tokenize, parser::parse, value::NumericResult},
};

/// Defines the structure of parsed code.
///
/// This module declares the `ExpressionNode` enum and the `Literal` union
/// that represent the syntactic structure of a source line as a tree. The
/// tree is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the uniform recursive node type for leaves, binary operations,
///   groups, and keyword calls.
/// - Attaches source spans to every node for error reporting.
pub mod ast;
/// Provides the unified error type for the whole pipeline.
///
/// This module defines every error that can be raised while lexing,
/// parsing, or evaluating a line. One `Error` type with an `ErrorKind` tag
/// and a source span covers all three stages, so every stage propagates
/// failures the same way.
///
/// # Responsibilities
/// - Defines the `ErrorKind` taxonomy for all failure modes.
/// - Attaches start/end positions and human-readable details.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the three-stage pipeline.
///
/// This module ties together the lexer, parser, evaluator, and the numeric
/// value type to provide the complete tokenize → parse → evaluate flow for
/// one line of source text.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, value.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities for safe numeric conversion and formatting.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, and `f64` without silent data
///   loss.
/// - Format floating-point results the way the REPL prints them.
pub mod util;

/// What one input line reduced to.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    /// The line held nothing to evaluate: it was blank, or contained only
    /// inert keyword calls.
    Empty,
    /// The line reduced to a single numeric value.
    Value(NumericResult),
}

/// Runs one source line through the full pipeline.
///
/// This is the function boundary the REPL and file drivers consume:
/// tokenize the line, build its expression trees, and evaluate them to at
/// most one numeric value. Lines share no state; every call starts fresh.
///
/// # Errors
/// Returns the first error any stage produced. An empty line is an empty
/// outcome, not an error.
///
/// # Examples
/// ```
/// use basix::{EvaluationOutcome, interpreter::value::NumericResult, process_line};
///
/// // Precedence and grouping behave conventionally.
/// let outcome = process_line("(1 + 2) * 3").unwrap();
/// assert_eq!(outcome, EvaluationOutcome::Value(NumericResult::Int(9)));
///
/// // Division is always true division.
/// let outcome = process_line("4 / 2").unwrap();
/// assert_eq!(outcome, EvaluationOutcome::Value(NumericResult::Float(2.0)));
///
/// // A blank line produces nothing, and no error.
/// assert_eq!(process_line("").unwrap(), EvaluationOutcome::Empty);
///
/// // Malformed input surfaces as an error scoped to this line.
/// assert!(process_line("1 / 0").is_err());
/// ```
pub fn process_line(text: &str) -> Result<EvaluationOutcome, Error> {
    let tokens = tokenize(text)?;
    let nodes = parse(&tokens)?;
    match evaluate_sequence(&nodes)? {
        Some(value) => Ok(EvaluationOutcome::Value(value)),
        None => Ok(EvaluationOutcome::Empty),
    }
}

/// Runs one source line through the lexer and parser only.
///
/// Used for syntax exercises: the driver's `--tree` mode prints the
/// resulting trees instead of evaluating them.
///
/// # Errors
/// Returns the first lexical or parse error.
///
/// # Examples
/// ```
/// use basix::parse_line;
///
/// let nodes = parse_line("1 + 2 * 3").unwrap();
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(nodes[0].to_string(), "1 + 2 * 3");
/// ```
pub fn parse_line(text: &str) -> Result<Vec<ExpressionNode>, Error> {
    let tokens = tokenize(text)?;
    parse(&tokens)
}
