//! Point Evaluator Trait
//!
//! Defines the interface the sampler uses to evaluate a function of one
//! variable. Parsed [`Expression`]s implement it; [`FnEvaluator`] adapts a
//! closure so sampling can be tested without going through the parser.

use crate::error::EvalError;
use crate::evaluator::Expression;

pub trait PointEvaluator {
    /// Evaluate the function at `x`.
    fn eval_at(&mut self, x: f64) -> Result<f64, EvalError>;
}

impl PointEvaluator for Expression {
    fn eval_at(&mut self, x: f64) -> Result<f64, EvalError> {
        Expression::eval_at(self, x)
    }
}

/// Wraps a closure as a [`PointEvaluator`].
pub struct FnEvaluator<F>(pub F);

impl<F> PointEvaluator for FnEvaluator<F>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    fn eval_at(&mut self, x: f64) -> Result<f64, EvalError> {
        (self.0)(x)
    }
}
