use rstest::rstest;
use shunt::{
    Error, ExpressionSolver, ParseError, RuntimeError, error::Paren, evaluate, to_postfix,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!((value - expected).abs() <= f64::EPSILON * expected.abs().max(1.0),
                    "{src:?} evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[rstest]
#[case("2+3", &["2", "3", "+"])]
#[case("2+3*4", &["2", "3", "4", "*", "+"])]
#[case("(2+3)*4", &["2", "3", "+", "4", "*"])]
#[case("1 - 2 + 3", &["1", "2", "-", "3", "+"])]
#[case("6 / 3 * 2", &["6", "3", "/", "2", "*"])]
#[case("2 * (3 + 4) - 5 / (1 + 1)", &["2", "3", "4", "+", "*", "5", "1", "1", "+", "/", "-"])]
#[case("((((7))))", &["7"])]
#[case("3.25 * 2.", &["3.25", "2.", "*"])]
fn converts_to_postfix(#[case] src: &str, #[case] expected: &[&str]) {
    assert_eq!(to_postfix(src).unwrap(), expected);
}

#[rstest]
#[case("2+3", 5.0)]
#[case("2+3*4", 14.0)]
#[case("(2+3)*4", 20.0)]
#[case("8 - 3 - 2", 3.0)]
#[case("8 / 4 / 2", 1.0)]
#[case("10 - 2 * 3", 4.0)]
#[case("(10 - 2) * 3", 24.0)]
#[case("1.5 + 2.25", 3.75)]
#[case("7 / 2", 3.5)]
#[case("0 / 5", 0.0)]
#[case("  42  ", 42.0)]
#[case("2 * (3 + (4 - 1)) / 3", 4.0)]
#[case("1 - 5", -4.0)]
fn evaluates(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("5/0"),
                     Error::Runtime(RuntimeError::DivisionByZero { index: 2 })));
    assert!(matches!(assert_failure("1 / (2 - 2)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("1 / 0.0"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn invalid_character_is_error() {
    assert_eq!(assert_failure("2+a"),
               Error::Parse(ParseError::InvalidCharacter { character: 'a',
                                                           position:  2, }));
    assert!(matches!(assert_failure("2^3"),
                     Error::Parse(ParseError::InvalidCharacter { character: '^', .. })));
    assert!(matches!(assert_failure("3 % 2"),
                     Error::Parse(ParseError::InvalidCharacter { character: '%', .. })));
}

#[rstest]
#[case("(2+3", Paren::Opening, 0)]
#[case("2+3)", Paren::Closing, 3)]
#[case("(1+(2*3)", Paren::Opening, 0)]
#[case(")(", Paren::Closing, 0)]
fn mismatched_parentheses_are_errors(#[case] src: &str,
                                     #[case] unmatched: Paren,
                                     #[case] position: usize) {
    assert_eq!(assert_failure(src),
               Error::Parse(ParseError::MismatchedParentheses { unmatched, position }));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
#[case("()")]
#[case("1 2")]
#[case("1 + + 2")]
#[case("* 3")]
#[case("4 -")]
#[case("(1)(2)")]
fn structurally_broken_expressions_are_invalid(#[case] src: &str) {
    assert!(matches!(assert_failure(src),
                     Error::Runtime(RuntimeError::InvalidExpression { .. })),
            "{src:?} was not reported as an invalid expression");
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(assert_failure("-3"),
                     Error::Runtime(RuntimeError::InvalidExpression { .. })));
}

#[test]
fn several_decimal_points_are_rejected() {
    assert_eq!(assert_failure("1.2.3 + 1"),
               Error::Parse(ParseError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                          position: 0, }));
}

#[test]
fn solver_follows_expression_changes() {
    let mut solver = ExpressionSolver::with_expression("1+2");
    assert_eq!(solver.evaluate(), Ok(3.0));

    solver.set_expression("2*(1+2)");
    assert_eq!(solver.expression(), "2*(1+2)");
    assert_eq!(solver.to_postfix().unwrap(), ["2", "1", "2", "+", "*"]);
    assert_eq!(solver.evaluate(), Ok(6.0));
}

#[test]
fn solver_can_be_shared_between_threads() {
    let solver = ExpressionSolver::with_expression("(2 + 3) * 4");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| solver.evaluate())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(20.0));
        }
    });
}
