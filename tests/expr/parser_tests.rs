//! tests for expression parsing
use rootspan::{Equation, ParseError};

fn eval(src: &str, x: f64) -> f64 {
    Equation::parse(src).unwrap().eval(x).unwrap()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2 + 3 * 4", 0.0), 14.0);
    assert_eq!(eval("(2 + 3) * 4", 0.0), 20.0);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(eval("2^3^2", 0.0), 512.0);
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert_eq!(eval("-2^2", 0.0), -4.0);
    assert_eq!(eval("3 - -2", 0.0), 5.0);
}

#[test]
fn division_and_subtraction_are_left_associative() {
    assert_eq!(eval("8 / 4 / 2", 0.0), 1.0);
    assert_eq!(eval("10 - 4 - 3", 0.0), 3.0);
}

#[test]
fn constants_resolve() {
    assert!((eval("2 * pi", 0.0) - std::f64::consts::TAU).abs() < 1e-15);
    assert!((eval("e", 0.0) - std::f64::consts::E).abs() < 1e-15);
}

#[test]
fn exponent_literals_parse() {
    assert_eq!(eval("1.5e2 - 150", 0.0), 0.0);
    assert_eq!(eval("2.5E-1", 0.0), 0.25);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(Equation::parse("").unwrap_err(), ParseError::Empty);
    assert_eq!(Equation::parse("   ").unwrap_err(), ParseError::Empty);
}

#[test]
fn dangling_operator_is_rejected() {
    assert!(matches!(
        Equation::parse("x +* 2").unwrap_err(),
        ParseError::Unexpected { .. }
    ));
    assert_eq!(Equation::parse("x +").unwrap_err(), ParseError::UnexpectedEnd);
}

#[test]
fn unbalanced_parenthesis_is_rejected() {
    assert_eq!(Equation::parse("(x").unwrap_err(), ParseError::UnexpectedEnd);
    assert!(matches!(
        Equation::parse("x)").unwrap_err(),
        ParseError::TrailingInput { .. }
    ));
}

#[test]
fn adjacent_operands_are_rejected() {
    assert!(matches!(
        Equation::parse("x 2").unwrap_err(),
        ParseError::TrailingInput { pos: 2 }
    ));
}

#[test]
fn stray_characters_are_rejected() {
    assert!(matches!(
        Equation::parse("2 @ 3").unwrap_err(),
        ParseError::UnexpectedChar { ch: '@', pos: 2 }
    ));
}

#[test]
fn malformed_number_is_rejected() {
    assert!(matches!(
        Equation::parse("1..2").unwrap_err(),
        ParseError::BadNumber { pos: 0 }
    ));
}

#[test]
fn source_text_is_preserved() {
    let equation = Equation::parse("x^3 - x - 2").unwrap();
    assert_eq!(equation.source(), "x^3 - x - 2");
    assert_eq!(equation.to_string(), "x^3 - x - 2");
}
