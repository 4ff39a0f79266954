/// The precedence-climbing levels of the grammar: the top-level parse loop
/// and the `expr`, `term`, and `power` rules.
pub mod core;
/// The `factor` rule: literals, unary minus, groups, and keyword calls.
pub mod factor;

pub use self::core::{ParseResult, parse, parse_expression};
