//! Mathematical built-in functions
//!
//! - Trigonometric: sin, cos, tan, sec, csc, cot, asin, acos, atan, atan2
//! - Hyperbolic: sinh, cosh, tanh, asinh, acosh, atanh
//! - Exponential/Logarithmic: exp, ln, log, log10, log2
//! - Rounding: floor, ceil, round, trunc
//! - Other: sqrt, cbrt, abs, sign, pow, hypot, mod, min, max

use crate::error::EvalError;

fn arity(name: &str, expected: &'static str, got: usize) -> EvalError {
    EvalError::Arity {
        name: name.to_string(),
        expected,
        got,
    }
}

/// Dispatch for functions taking exactly one argument
macro_rules! unary_math_fn {
    ($name:expr, $args:expr, $f:expr) => {{
        if $args.len() != 1 {
            return Err(arity($name, "1", $args.len()));
        }
        Ok($f($args[0]))
    }};
}

/// Dispatch for functions taking exactly two arguments
macro_rules! binary_math_fn {
    ($name:expr, $args:expr, $f:expr) => {{
        if $args.len() != 2 {
            return Err(arity($name, "2", $args.len()));
        }
        Ok($f($args[0], $args[1]))
    }};
}

/// Returns true if `name` is a known function.
pub fn is_builtin(name: &str) -> bool {
    matches!(
        name,
        "sin" | "cos" | "tan" | "sec" | "csc" | "cot" | "asin" | "acos" | "atan" | "atan2"
            | "sinh" | "cosh" | "tanh" | "asinh" | "acosh" | "atanh"
            | "exp" | "ln" | "log" | "log10" | "log2"
            | "floor" | "ceil" | "round" | "trunc"
            | "sqrt" | "cbrt" | "abs" | "sign" | "pow" | "hypot" | "mod" | "min" | "max"
    )
}

pub fn call_builtin(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    match name {
        // Trigonometric
        "sin" => unary_math_fn!(name, args, f64::sin),
        "cos" => unary_math_fn!(name, args, f64::cos),
        "tan" => unary_math_fn!(name, args, f64::tan),
        "sec" => unary_math_fn!(name, args, |x: f64| 1.0 / x.cos()),
        "csc" => unary_math_fn!(name, args, |x: f64| 1.0 / x.sin()),
        "cot" => unary_math_fn!(name, args, |x: f64| 1.0 / x.tan()),
        "asin" => unary_math_fn!(name, args, f64::asin),
        "acos" => unary_math_fn!(name, args, f64::acos),
        "atan" => unary_math_fn!(name, args, f64::atan),
        "atan2" => binary_math_fn!(name, args, f64::atan2),

        // Hyperbolic
        "sinh" => unary_math_fn!(name, args, f64::sinh),
        "cosh" => unary_math_fn!(name, args, f64::cosh),
        "tanh" => unary_math_fn!(name, args, f64::tanh),
        "asinh" => unary_math_fn!(name, args, f64::asinh),
        "acosh" => unary_math_fn!(name, args, f64::acosh),
        "atanh" => unary_math_fn!(name, args, f64::atanh),

        // Exponential / logarithmic
        "exp" => unary_math_fn!(name, args, f64::exp),
        "ln" => unary_math_fn!(name, args, f64::ln),
        "log" => match args {
            [x] => Ok(x.ln()),
            [x, base] => Ok(x.ln() / base.ln()),
            _ => Err(arity(name, "1 or 2", args.len())),
        },
        "log10" => unary_math_fn!(name, args, f64::log10),
        "log2" => unary_math_fn!(name, args, f64::log2),

        // Rounding
        "floor" => unary_math_fn!(name, args, f64::floor),
        "ceil" => unary_math_fn!(name, args, f64::ceil),
        "round" => unary_math_fn!(name, args, f64::round),
        "trunc" => unary_math_fn!(name, args, f64::trunc),

        // Other
        "sqrt" => unary_math_fn!(name, args, f64::sqrt),
        "cbrt" => unary_math_fn!(name, args, f64::cbrt),
        "abs" => unary_math_fn!(name, args, f64::abs),
        "sign" => unary_math_fn!(name, args, sign),
        "pow" => binary_math_fn!(name, args, f64::powf),
        "hypot" => binary_math_fn!(name, args, f64::hypot),
        "mod" => binary_math_fn!(name, args, floored_mod),
        "min" => fold_nonempty(name, args, f64::min),
        "max" => fold_nonempty(name, args, f64::max),

        _ => Err(EvalError::UnknownFunction(name.to_string())),
    }
}

/// `sign(0) == 0`, unlike `f64::signum`.
fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() {
        x
    } else {
        x.signum()
    }
}

/// Result takes the sign of the divisor.
fn floored_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

fn fold_nonempty(name: &str, args: &[f64], f: fn(f64, f64) -> f64) -> Result<f64, EvalError> {
    match args.split_first() {
        Some((first, rest)) => Ok(rest.iter().copied().fold(*first, f)),
        None => Err(arity(name, "at least 1", 0)),
    }
}
