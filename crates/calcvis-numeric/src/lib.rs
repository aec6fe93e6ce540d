pub mod builtins;
pub mod error;
pub mod evaluator;
pub mod point_evaluator;
pub mod sampler;
pub mod scope;

// Re-exports
pub use error::EvalError;
pub use evaluator::{evaluate_expression, Expression};
pub use point_evaluator::{FnEvaluator, PointEvaluator};
pub use sampler::{
    find_nearest, pair_by_index, sample, sample_grid, sample_with, GridSample, MalformedPolicy,
    Sample, Sampler, MAX_STEPS,
};
pub use scope::Scope;
