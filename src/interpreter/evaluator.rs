/// Binary operator application: promotion, checked integer arithmetic,
/// true division, and exponentiation.
pub mod binary;
/// The tree walk itself, plus the top-level sequence fold.
pub mod core;

pub use self::core::{EvalResult, evaluate, evaluate_sequence};
