use calcvis_parser::ParseError;
use thiserror::Error;

/// Failures while evaluating an expression at a point.
///
/// Domain problems such as `1/0` or `log(-1)` are not errors: they follow
/// IEEE-754 and produce infinities or NaN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{name}() expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: &'static str,
        got: usize,
    },
}
