/// The evaluator module reduces expression trees to numeric results.
///
/// The evaluator walks the tree produced by the parser, applies arithmetic
/// under the int/float promotion rule, and produces a single numeric value
/// per line or an evaluation error.
///
/// # Responsibilities
/// - Folds expression trees left to right into one `NumericResult`.
/// - Enforces true division, checked integer arithmetic, and the
///   division-by-zero check.
/// - Rejects non-numeric leaves and adjacent values with no operator.
pub mod evaluator;
/// The lexer module tokenizes one source line for further parsing.
///
/// The lexer reads the raw line and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator, or a keyword. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind and source span.
/// - Handles numeric and quoted literals, identifiers, keywords, type
///   names, and one- and two-character operators.
/// - Reports lexical errors for illegal characters and unterminated quotes;
///   on error no partial token list survives.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser consumes the token stream and constructs a precedence-correct
/// tree: `^` over `*`/`/` over `+`/`-`, with parenthesized grouping and the
/// factor-position unary minus.
///
/// # Responsibilities
/// - Converts tokens into structured `ExpressionNode` trees.
/// - Validates the grammar, reporting errors with source spans.
/// - Terminates on malformed input instead of recovering; one bad line
///   aborts that line's parse entirely.
pub mod parser;
/// The value module defines the numeric result type.
///
/// # Responsibilities
/// - Defines `NumericResult` with its `Int` and `Float` variants.
/// - Provides checked promotion from integer to floating point.
pub mod value;
