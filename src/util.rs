/// Numeric conversion and formatting helpers.
///
/// This module provides safe conversions between integer and floating-point
/// types without silent data loss, and the float formatting used by result
/// and token display. All conversions return a `Result` that is `Ok` only
/// when the conversion is lossless.
pub mod num;
