//! Parser tests for the infix expression grammar
//!
//! These tests verify operator precedence, implicit multiplication and the
//! error surface for malformed input.

use calcvis_parser::{parse, BinaryOp, Expr, ParseError};

fn num(n: f64) -> Expr {
    Expr::Number(n)
}

fn var(name: &str) -> Expr {
    Expr::Variable(name.to_string())
}

#[test]
fn test_parse_number_forms() {
    assert_eq!(parse("12").unwrap(), num(12.0));
    assert_eq!(parse("1.5").unwrap(), num(1.5));
    assert_eq!(parse(".5").unwrap(), num(0.5));
    assert_eq!(parse("2e-3").unwrap(), num(0.002));
}

#[test]
fn test_precedence_mul_over_add() {
    let expr = parse("1 + 2 * x").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Add,
            num(1.0),
            Expr::binary(BinaryOp::Mul, num(2.0), var("x"))
        )
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    let expr = parse("x - 1 - 2").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Sub, var("x"), num(1.0)),
            num(2.0)
        )
    );
}

#[test]
fn test_power_is_right_associative() {
    let expr = parse("2^3^2").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Pow,
            num(2.0),
            Expr::binary(BinaryOp::Pow, num(3.0), num(2.0))
        )
    );
}

#[test]
fn test_double_star_is_power() {
    assert_eq!(parse("x**2").unwrap(), parse("x^2").unwrap());
}

#[test]
fn test_unary_minus_binds_looser_than_power() {
    let expr = parse("-x^2").unwrap();
    assert_eq!(
        expr,
        Expr::neg(Expr::binary(BinaryOp::Pow, var("x"), num(2.0)))
    );
}

#[test]
fn test_signed_exponent() {
    let expr = parse("2^-x").unwrap();
    assert_eq!(
        expr,
        Expr::binary(BinaryOp::Pow, num(2.0), Expr::neg(var("x")))
    );
}

#[test]
fn test_double_negation_cancels() {
    assert_eq!(parse("--x").unwrap(), var("x"));
    assert_eq!(parse("+x").unwrap(), var("x"));
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(
        parse("2x").unwrap(),
        Expr::binary(BinaryOp::Mul, num(2.0), var("x"))
    );
    assert_eq!(
        parse("3(x + 1)").unwrap(),
        Expr::binary(
            BinaryOp::Mul,
            num(3.0),
            Expr::binary(BinaryOp::Add, var("x"), num(1.0))
        )
    );
    assert!(parse("(x + 1)(x - 1)").is_ok());
    assert!(parse("2 sin(x)").is_ok());
}

#[test]
fn test_implicit_binds_tighter_than_division() {
    let expr = parse("1/2x").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Div,
            num(1.0),
            Expr::binary(BinaryOp::Mul, num(2.0), var("x"))
        )
    );
}

#[test]
fn test_implicit_with_power() {
    let expr = parse("3x^2").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Mul,
            num(3.0),
            Expr::binary(BinaryOp::Pow, var("x"), num(2.0))
        )
    );
}

#[test]
fn test_exponential_constant() {
    let expr = parse("e^x").unwrap();
    assert_eq!(expr, Expr::binary(BinaryOp::Pow, var("e"), var("x")));
}

#[test]
fn test_calls() {
    match parse("atan2(x, 1)").unwrap() {
        Expr::Call { name, args } => {
            assert_eq!(name, "atan2");
            assert_eq!(args.len(), 2);
        }
        other => panic!("Expected Call, got {:?}", other),
    }

    match parse("pi()").unwrap() {
        Expr::Call { args, .. } => assert!(args.is_empty()),
        other => panic!("Expected Call, got {:?}", other),
    }
}

#[test]
fn test_variables_collects_free_names() {
    let expr = parse("a*x + sin(b)").unwrap();
    let vars: Vec<&str> = expr.variables().into_iter().collect();
    assert_eq!(vars, vec!["a", "b", "x"]);
}

#[test]
fn test_display_reparses_to_same_tree() {
    for source in ["x^2 - 3x + 2", "sin(x)/x", "-(x+1)^-2", "e^(-x^2/2)"] {
        let expr = parse(source).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed, "display of {:?} did not round trip", source);
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), Err(ParseError::Empty));
    assert_eq!(parse("   "), Err(ParseError::Empty));
}

#[test]
fn test_syntax_errors() {
    for source in ["x +", "(x", "2 3", "sin(", "x $ 2", "*x"] {
        match parse(source) {
            Err(ParseError::Syntax(_)) => {}
            other => panic!("{:?} should be a syntax error, got {:?}", source, other),
        }
    }
}
