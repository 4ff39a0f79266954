use basix::{
    EvaluationOutcome, error::ErrorKind, interpreter::value::NumericResult, process_line,
};

fn eval(src: &str) -> EvaluationOutcome {
    process_line(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn eval_int(src: &str) -> i64 {
    match eval(src) {
        EvaluationOutcome::Value(NumericResult::Int(n)) => n,
        other => panic!("'{src}' did not produce an integer: {other:?}"),
    }
}

fn eval_float(src: &str) -> f64 {
    match eval(src) {
        EvaluationOutcome::Value(NumericResult::Float(v)) => v,
        other => panic!("'{src}' did not produce a float: {other:?}"),
    }
}

fn eval_err(src: &str) -> basix::error::Error {
    match process_line(src) {
        Err(e) => e,
        Ok(outcome) => panic!("'{src}' succeeded with {outcome:?} but was expected to fail"),
    }
}

#[test]
fn precedence_follows_convention() {
    assert_eq!(eval_int("1 + 2 * 3"), 7);
    assert_eq!(eval_int("(1 + 2) * 3"), 9);
    assert_eq!(eval_int("2 * 3 + 4 * 5"), 26);
    assert_eq!(eval_int("4 * 2 ^ 3"), 32);
}

#[test]
fn same_precedence_associates_left() {
    assert_eq!(eval_int("10 - 2 - 3"), 5);
    assert_eq!(eval_int("1 - 2 - 3"), -4);
    assert_eq!(eval_float("8 / 2 / 2"), 2.0);
}

#[test]
fn grouping_changes_order_not_value() {
    assert_eq!(eval_int("(1 + 2) * 3"), 9);
    assert_eq!(eval_int("1 + (2 * 3)"), 7);
    assert_eq!(eval_int("((((5))))"), 5);
}

#[test]
fn division_is_always_true_division() {
    assert_eq!(eval_float("4 / 2"), 2.0);
    assert_eq!(eval_float("7 / 2"), 3.5);
    assert_eq!(eval_float("1.0 / 4"), 0.25);
}

#[test]
fn promotion_to_float_when_either_operand_is_float() {
    assert_eq!(eval_int("1 + 2"), 3);
    assert_eq!(eval_float("1 + 2.0"), 3.0);
    assert_eq!(eval_float("1.5 + 1.5"), 3.0);
    assert_eq!(eval_float("2.0 * 3"), 6.0);
}

#[test]
fn unary_minus_binds_only_without_left_operand() {
    assert_eq!(eval_int("3 - 2"), 1);
    assert_eq!(eval_int("3 * -2"), -6);
    assert_eq!(eval_int("-5"), -5);
    assert_eq!(eval_int("3 - -2"), 5);
    assert_eq!(eval_float("-2.5 * 2"), -5.0);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(eval_int("2 ^ 10"), 1024);
    assert_eq!(eval_int("2 ^ 3 ^ 2"), 512);
    assert_eq!(eval_float("2 ^ -1"), 0.5);
    assert_eq!(eval_float("2.0 ^ 2"), 4.0);
}

#[test]
fn empty_group_is_integer_zero() {
    assert_eq!(eval("()"), EvaluationOutcome::Value(NumericResult::Int(0)));
    assert_eq!(eval_int("() + 1"), 1);
    assert_eq!(eval_int("() * 3"), 0);
}

#[test]
fn empty_line_is_an_empty_outcome() {
    assert_eq!(eval(""), EvaluationOutcome::Empty);
    assert_eq!(eval("   "), EvaluationOutcome::Empty);
    assert_eq!(eval("\t"), EvaluationOutcome::Empty);
}

#[test]
fn keyword_calls_are_inert() {
    assert_eq!(eval("read(1 + 2)"), EvaluationOutcome::Empty);
    assert_eq!(eval("write(2 * 3)"), EvaluationOutcome::Empty);
    // The argument is still evaluated, so its errors surface.
    assert_eq!(eval_err("write(1 / 0)").kind, ErrorKind::DivisionByZero);
}

#[test]
fn keyword_call_has_no_value_in_arithmetic() {
    assert_eq!(eval_err("read(1 + 2) + 1").kind, ErrorKind::NotANumber);
}

#[test]
fn non_numeric_leaves_fail_arithmetic() {
    assert_eq!(eval_err("x").kind, ErrorKind::NotANumber);
    assert_eq!(eval_err("goto").kind, ErrorKind::NotANumber);
    assert_eq!(eval_err("true").kind, ErrorKind::NotANumber);
    assert_eq!(eval_err("'a'").kind, ErrorKind::NotANumber);
    assert_eq!(eval_err("\"hi\" + 1").kind, ErrorKind::NotANumber);
}

#[test]
fn adjacent_values_need_an_operator() {
    assert_eq!(eval_err("1 2").kind, ErrorKind::MissingOperator);
    assert_eq!(eval_err("(1 + 2) (3)").kind, ErrorKind::MissingOperator);
}

#[test]
fn unmatched_parenthesis_is_reported() {
    assert_eq!(eval_err("(1 + 2").kind, ErrorKind::ExpectedToken);
    assert_eq!(eval_err("read(1 + 2").kind, ErrorKind::ExpectedToken);
}

#[test]
fn stray_tokens_are_invalid_syntax() {
    assert_eq!(eval_err("+ 1").kind, ErrorKind::InvalidSyntax);
    assert_eq!(eval_err("1 == 2").kind, ErrorKind::InvalidSyntax);
    assert_eq!(eval_err("1 + *").kind, ErrorKind::InvalidSyntax);
    assert_eq!(eval_err("3 * - x").kind, ErrorKind::InvalidSyntax);
}

#[test]
fn division_by_zero_points_at_the_slash() {
    let err = eval_err("10 / 0");
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
    assert_eq!(err.start.offset, 3);

    assert_eq!(eval_err("1.0 / 0.0").kind, ErrorKind::DivisionByZero);
    assert_eq!(eval_err("5 / (3 - 3)").kind, ErrorKind::DivisionByZero);
}

#[test]
fn unterminated_quote_points_at_the_opening_quote() {
    let err = eval_err("\"abc");
    assert_eq!(err.kind, ErrorKind::UnterminatedQuote);
    assert_eq!(err.start.offset, 0);

    assert_eq!(eval_err("1 + 'x").kind, ErrorKind::UnterminatedQuote);
}

#[test]
fn illegal_characters_abort_the_line() {
    assert_eq!(eval_err("$").kind, ErrorKind::IllegalCharacter);
    assert_eq!(eval_err("1 ? 2").kind, ErrorKind::IllegalCharacter);
    // `!` is only defined as part of `!=`.
    assert_eq!(eval_err("!5").kind, ErrorKind::IllegalCharacter);
    // A second dot ends the number; the dot itself has no rule.
    assert_eq!(eval_err("1.2.3").kind, ErrorKind::IllegalCharacter);
}

#[test]
fn integer_arithmetic_is_checked() {
    assert_eq!(eval_err("9223372036854775807 + 1").kind, ErrorKind::Overflow);
    assert_eq!(eval_err("2 ^ 64").kind, ErrorKind::Overflow);
    assert_eq!(eval_err("99999999999999999999").kind, ErrorKind::Overflow);
}

#[test]
fn error_display_names_the_kind() {
    let err = eval_err("1 / 0");
    assert_eq!(err.to_string(), "Division By Zero: division by zero");

    let err = eval_err("$");
    assert_eq!(err.to_string(), "Illegal Character: '$'");
}

#[test]
fn float_results_always_show_a_decimal_point() {
    assert_eq!(eval("4 / 2"),
               EvaluationOutcome::Value(NumericResult::Float(2.0)));
    assert_eq!(NumericResult::Float(2.0).to_string(), "2.0");
    assert_eq!(NumericResult::Float(3.5).to_string(), "3.5");
    assert_eq!(NumericResult::Int(7).to_string(), "7");
}
