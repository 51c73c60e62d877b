use calcline::{error::{EvalNotice, ParseError},
               evaluate_line};

const TOLERANCE: f64 = 1e-9;

fn eval_value(src: &str) -> f64 {
    match evaluate_line(src) {
        Ok(evaluation) => {
            assert!(evaluation.notices.is_empty(),
                    "'{src}' raised unexpected notices: {:?}",
                    evaluation.notices);
            evaluation.value
        },
        Err(e) => panic!("'{src}' failed to evaluate: {e}"),
    }
}

fn eval_error(src: &str) -> ParseError {
    match evaluate_line(src) {
        Ok(evaluation) => panic!("'{src}' evaluated to {} but was expected to fail",
                                 evaluation.value),
        Err(e) => e,
    }
}

fn assert_value(src: &str, expected: f64) {
    let value = eval_value(src);
    assert!((value - expected).abs() < TOLERANCE,
            "'{src}' evaluated to {value}, expected {expected}");
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
    assert_value("42", 42.0);
    assert_value("3.25 + 0.75", 4.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("2 * 3 + 1", 7.0);
    assert_value("10 - 2 * 3", 4.0);
    assert_value("1 + 9 / 3", 4.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("2 * (3 + 1)", 8.0);
    assert_value("((2)) * (3 + 4)", 14.0);
    assert_value("(1 + (2 + (3 + 4)))", 10.0);
}

#[test]
fn operators_are_left_associative() {
    assert_value("3 - 2 - 1", 0.0);
    assert_value("100 / 5 / 2", 10.0);
    assert_value("1 - 2 + 3", 2.0);
    assert_value("2 * 6 / 4", 3.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  7*8 ", 56.0);
    assert_value("\t1\t+\t1\t", 2.0);
}

#[test]
fn evaluation_is_idempotent() {
    let first = eval_value("(4 + 1) * 3 / 2");
    let second = eval_value("(4 + 1) * 3 / 2");
    assert_eq!(first, second);
}

#[test]
fn division_by_zero_substitutes_zero() {
    let evaluation = evaluate_line("10 / 0").unwrap();
    assert_eq!(evaluation.value, 0.0);
    assert_eq!(evaluation.notices,
               vec![EvalNotice::DivisionByZero { column: 4 }]);
    assert_eq!(evaluation.to_string(), "Resultado: 0.00");
}

#[test]
fn division_by_zero_does_not_abort_the_expression() {
    let evaluation = evaluate_line("4 / (3 - 3) + 1").unwrap();
    assert_eq!(evaluation.value, 1.0);
    assert_eq!(evaluation.notices.len(), 1);
}

#[test]
fn division_by_zero_notice_message() {
    let evaluation = evaluate_line("10 / 0").unwrap();
    let message = evaluation.notices[0].to_string();
    assert!(message.starts_with("Error: "), "got: {message}");
    assert!(message.contains("Division by zero"), "got: {message}");
}

#[test]
fn result_line_has_two_decimal_places() {
    assert_eq!(evaluate_line("1 + 2 * 3").unwrap().to_string(),
               "Resultado: 7.00");
    assert_eq!(evaluate_line("10 / 4").unwrap().to_string(),
               "Resultado: 2.50");
}

#[test]
fn trailing_operator_is_a_parse_error() {
    assert_eq!(eval_error("2 *"), ParseError::UnexpectedEndOfInput);
    assert_eq!(eval_error("1 +"), ParseError::UnexpectedEndOfInput);
}

#[test]
fn unrecognized_character_is_reported() {
    let error = eval_error("1 & 2");
    assert_eq!(error,
               ParseError::UnexpectedCharacter { found:  "&".to_string(),
                                                 column: 3, });
    assert!(error.to_string().contains('&'));
    assert!(error.to_string().starts_with("Error: "));
}

#[test]
fn invalid_number_is_reported() {
    assert_eq!(eval_error("1.2.3 + 1"),
               ParseError::InvalidNumber { literal: "1.2.3".to_string(),
                                           column:  1, });
}

#[test]
fn unbalanced_parentheses_are_a_parse_error() {
    assert_eq!(eval_error("(1 + 2"),
               ParseError::ExpectedClosingParen { column: 1 });
    assert!(matches!(eval_error(")"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(eval_error("1 + 2)"),
                     ParseError::TrailingTokens { .. }));
}

#[test]
fn missing_operand_is_a_parse_error() {
    assert!(matches!(eval_error("* 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(eval_error("1 + * 2"),
                     ParseError::UnexpectedToken { .. }));
    assert_eq!(eval_error(""), ParseError::UnexpectedEndOfInput);
}

#[test]
fn adjacent_numbers_are_a_parse_error() {
    assert_eq!(eval_error("1 2"),
               ParseError::TrailingTokens { token:  "2".to_string(),
                                            column: 3, });
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(eval_error("-5"), ParseError::UnexpectedToken { .. }));
}
