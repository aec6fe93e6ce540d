//! Tree-walking evaluation of parsed expressions.

use crate::builtins::{call_builtin, is_builtin};
use crate::error::EvalError;
use crate::scope::{constant, Scope};
use calcvis_parser::{BinaryOp, Expr, UnaryOp};
use log::debug;

/// An expression parsed once and evaluated at many points.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    tree: Expr,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, EvalError> {
        let tree = calcvis_parser::parse(source)?;
        Ok(Self {
            source: source.to_string(),
            tree,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate with `x` bound to the given abscissa.
    pub fn eval_at(&self, x: f64) -> Result<f64, EvalError> {
        self.eval_in(&Scope::with_x(x))
    }

    pub fn eval_in(&self, scope: &Scope) -> Result<f64, EvalError> {
        eval(&self.tree, scope)
    }

    /// Names that will fail to resolve at every point: variables other than
    /// `x` that are not constants, and calls to unknown functions.
    pub fn unresolved_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_unresolved(&self.tree, &mut names);
        names.sort();
        names.dedup();
        names
    }
}

pub fn eval(expr: &Expr, scope: &Scope) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Variable(name) => scope
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
        Expr::Unary {
            op: UnaryOp::Neg,
            operand,
        } => Ok(-eval(operand, scope)?),
        Expr::Binary { op, lhs, rhs } => {
            let a = eval(lhs, scope)?;
            let b = eval(rhs, scope)?;
            Ok(match op {
                BinaryOp::Add => a + b,
                BinaryOp::Sub => a - b,
                BinaryOp::Mul => a * b,
                BinaryOp::Div => a / b,
                BinaryOp::Pow => a.powf(b),
            })
        }
        Expr::Call { name, args } => {
            let values = args
                .iter()
                .map(|arg| eval(arg, scope))
                .collect::<Result<Vec<_>, _>>()?;
            call_builtin(name, &values)
        }
    }
}

fn collect_unresolved(expr: &Expr, out: &mut Vec<String>) {
    match expr {
        Expr::Number(_) => {}
        Expr::Variable(name) => {
            if name != "x" && constant(name).is_none() {
                out.push(name.clone());
            }
        }
        Expr::Unary { operand, .. } => collect_unresolved(operand, out),
        Expr::Binary { lhs, rhs, .. } => {
            collect_unresolved(lhs, out);
            collect_unresolved(rhs, out);
        }
        Expr::Call { name, args } => {
            if !is_builtin(name) {
                out.push(format!("{}()", name));
            }
            for arg in args {
                collect_unresolved(arg, out);
            }
        }
    }
}

/// Evaluate expression text at a single `x`.
///
/// Any parse or evaluation failure yields `0.0` rather than an error. Callers
/// plotting the result should expect flat segments at `y = 0` when the text
/// is malformed; use [`Expression`] directly to observe the failure.
pub fn evaluate_expression(source: &str, x: f64) -> f64 {
    match Expression::parse(source).and_then(|expr| expr.eval_at(x)) {
        Ok(y) => y,
        Err(e) => {
            debug!("evaluating {:?} at x = {}: {}", source, x, e);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial() {
        let expr = Expression::parse("x^2 - 3x + 2").unwrap();
        assert_relative_eq!(expr.eval_at(0.0).unwrap(), 2.0);
        assert_relative_eq!(expr.eval_at(1.0).unwrap(), 0.0);
        assert_relative_eq!(expr.eval_at(3.0).unwrap(), 2.0);
    }

    #[test]
    fn test_exponential_and_trig() {
        let expr = Expression::parse("e^x").unwrap();
        assert_relative_eq!(expr.eval_at(1.0).unwrap(), std::f64::consts::E);

        let expr = Expression::parse("sin(pi/2) + cos(0)").unwrap();
        assert_relative_eq!(expr.eval_at(0.0).unwrap(), 2.0);
    }

    #[test]
    fn test_ieee_domain_results() {
        let recip = Expression::parse("1/x").unwrap();
        assert_eq!(recip.eval_at(0.0).unwrap(), f64::INFINITY);

        let log = Expression::parse("log(x)").unwrap();
        assert!(log.eval_at(-1.0).unwrap().is_nan());
    }

    #[test]
    fn test_undefined_variable() {
        let expr = Expression::parse("x + y").unwrap();
        assert_eq!(
            expr.eval_at(1.0),
            Err(EvalError::UndefinedVariable("y".to_string()))
        );
    }

    #[test]
    fn test_eval_in_custom_scope() {
        let expr = Expression::parse("a*x").unwrap();
        let mut scope = Scope::with_x(3.0);
        scope.set("a", 2.0);
        assert_eq!(expr.eval_in(&scope).unwrap(), 6.0);
    }

    #[test]
    fn test_unresolved_names() {
        let expr = Expression::parse("a*sin(x) + foo(x) + pi + a").unwrap();
        assert_eq!(expr.unresolved_names(), vec!["a".to_string(), "foo()".to_string()]);
        assert!(Expression::parse("e^x").unwrap().unresolved_names().is_empty());
    }

    #[test]
    fn test_sentinel_on_malformed_text() {
        assert_eq!(evaluate_expression("x +", 2.0), 0.0);
        assert_eq!(evaluate_expression("", 2.0), 0.0);
        assert_eq!(evaluate_expression("y", 2.0), 0.0);
        assert_eq!(evaluate_expression("x * 2", 2.0), 4.0);
    }

    #[test]
    fn test_sentinel_passes_non_finite_through() {
        assert_eq!(evaluate_expression("1/x", 0.0), f64::INFINITY);
    }
}
