//! Interval sampling of expressions.
//!
//! A pass evaluates `steps + 1` equally spaced abscissae over `[x_min, x_max]`
//! (both endpoints included) and keeps only points whose value is finite.
//! Dropped points are not replaced, so results have variable length.
//!
//! [`GridSample`] keeps the nominal grid index of each surviving point. Two
//! passes over the same interval and step count can then be paired with
//! [`pair_by_index`] instead of by position, which breaks as soon as either
//! pass drops a point the other kept.
//!
//! Abscissae are strictly increasing. When the step is smaller than one ulp
//! of the abscissa, grid points that round onto their predecessor are skipped,
//! so such passes can return fewer than `steps + 1` points even for
//! everywhere-defined expressions.

use crate::error::EvalError;
use crate::evaluator::Expression;
use crate::point_evaluator::{FnEvaluator, PointEvaluator};
use log::{debug, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSample {
    /// Position on the nominal grid, `0..=steps`
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl GridSample {
    pub fn sample(&self) -> Sample {
        Sample {
            x: self.x,
            y: self.y,
        }
    }
}

/// What to emit when the expression text cannot be parsed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Emit `y = 0` at every grid point, like
    /// [`evaluate_expression`](crate::evaluate_expression).
    #[default]
    ZeroSentinel,
    /// Emit nothing.
    Omit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sampler {
    pub malformed: MalformedPolicy,
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(malformed: MalformedPolicy) -> Self {
        Self { malformed }
    }

    pub fn sample(&self, source: &str, x_min: f64, x_max: f64, steps: usize) -> Vec<Sample> {
        self.sample_grid(source, x_min, x_max, steps)
            .iter()
            .map(GridSample::sample)
            .collect()
    }

    pub fn sample_grid(
        &self,
        source: &str,
        x_min: f64,
        x_max: f64,
        steps: usize,
    ) -> Vec<GridSample> {
        match Expression::parse(source) {
            Ok(mut expr) => {
                let unknown = expr.unresolved_names();
                if !unknown.is_empty() {
                    warn!(
                        "{:?} uses unknown names {}; no point will evaluate",
                        expr.source(),
                        unknown.join(", ")
                    );
                }
                sample_with(&mut expr, x_min, x_max, steps)
            }
            Err(e) => {
                debug!("cannot parse {:?}: {}", source, e);
                match self.malformed {
                    MalformedPolicy::ZeroSentinel => {
                        let mut zero = FnEvaluator(|_x: f64| -> Result<f64, EvalError> { Ok(0.0) });
                        sample_with(&mut zero, x_min, x_max, steps)
                    }
                    MalformedPolicy::Omit => Vec::new(),
                }
            }
        }
    }
}

/// Largest step count a single pass accepts.
pub const MAX_STEPS: usize = 1 << 20;

/// Sample any [`PointEvaluator`] over the grid.
///
/// Returns an empty sequence when `steps` is 0 or above [`MAX_STEPS`], or the
/// interval is not a finite `x_min < x_max`.
pub fn sample_with<E: PointEvaluator + ?Sized>(
    evaluator: &mut E,
    x_min: f64,
    x_max: f64,
    steps: usize,
) -> Vec<GridSample> {
    if steps == 0
        || steps > MAX_STEPS
        || !x_min.is_finite()
        || !x_max.is_finite()
        || x_min >= x_max
    {
        warn!(
            "refusing to sample [{}, {}] with {} steps",
            x_min, x_max, steps
        );
        return Vec::new();
    }

    let grid = Grid::new(x_min, x_max, steps);
    let mut out = Vec::with_capacity(steps + 1);
    let mut failures = 0usize;
    let mut previous_x = f64::NEG_INFINITY;

    for index in 0..=steps {
        let x = grid.abscissa(index);
        // Below one ulp per step neighbouring abscissae collapse
        if x <= previous_x {
            continue;
        }
        previous_x = x;

        match evaluator.eval_at(x) {
            Ok(y) if y.is_finite() => out.push(GridSample { index, x, y }),
            Ok(_) => {}
            Err(_) => failures += 1,
        }
    }

    if out.len() <= steps {
        debug!(
            "kept {} of {} points on [{}, {}] ({} evaluation errors)",
            out.len(),
            steps + 1,
            x_min,
            x_max,
            failures
        );
    }
    out
}

/// Abscissae of a pass, safe against `x_max - x_min` overflowing.
struct Grid {
    x_min: f64,
    x_max: f64,
    steps: usize,
    step: f64,
    /// Half-width step, used when the full span is not representable.
    half_step: Option<f64>,
}

impl Grid {
    fn new(x_min: f64, x_max: f64, steps: usize) -> Self {
        let step = (x_max - x_min) / steps as f64;
        let half_step = if step.is_finite() {
            None
        } else {
            Some((x_max / 2.0 - x_min / 2.0) / steps as f64)
        };
        Self {
            x_min,
            x_max,
            steps,
            step,
            half_step,
        }
    }

    fn abscissa(&self, index: usize) -> f64 {
        if index == self.steps {
            return self.x_max;
        }
        let x = match self.half_step {
            None => self.x_min + index as f64 * self.step,
            Some(half) => (self.x_min / 2.0 + index as f64 * half) * 2.0,
        };
        // Rounding can push an abscissa a hair past x_max
        x.min(self.x_max)
    }
}

/// Sample with the default policy.
pub fn sample(source: &str, x_min: f64, x_max: f64, steps: usize) -> Vec<Sample> {
    Sampler::new().sample(source, x_min, x_max, steps)
}

pub fn sample_grid(source: &str, x_min: f64, x_max: f64, steps: usize) -> Vec<GridSample> {
    Sampler::new().sample_grid(source, x_min, x_max, steps)
}

/// Pair two grid passes point-for-point, keeping only indices both contain.
///
/// Both inputs must be sorted by index, as the sampler produces them.
pub fn pair_by_index(a: &[GridSample], b: &[GridSample]) -> Vec<(GridSample, GridSample)> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].index.cmp(&b[j].index) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push((a[i], b[j]));
                i += 1;
                j += 1;
            }
        }
    }

    out
}

/// First sample whose abscissa lies strictly within `tolerance` of `x`.
pub fn find_nearest(samples: &[Sample], x: f64, tolerance: f64) -> Option<&Sample> {
    samples.iter().find(|s| (s.x - x).abs() < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_strictly_increasing(samples: &[GridSample]) {
        for w in samples.windows(2) {
            assert!(w[0].x < w[1].x, "{} then {}", w[0].x, w[1].x);
        }
    }

    #[test]
    fn test_unknown_names_sample_to_nothing() {
        let expr = Expression::parse("a*x + foo(x)").unwrap();
        assert_eq!(expr.unresolved_names(), vec!["a".to_string(), "foo()".to_string()]);
        assert!(sample("a*x + foo(x)", -1.0, 1.0, 10).is_empty());
    }

    #[test]
    fn test_span_wider_than_f64_max() {
        let samples = sample_grid("x", -1e308, 1e308, 4);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].x, -1e308);
        assert_eq!(samples[2].x, 0.0);
        assert_eq!(samples[4].x, 1e308);
        assert_strictly_increasing(&samples);
        assert!(samples.iter().all(|s| s.y == s.x));
    }

    #[test]
    fn test_huge_step_count_is_refused() {
        assert!(sample("x", 0.0, 1.0, usize::MAX).is_empty());
        assert!(sample("x", 0.0, 1.0, MAX_STEPS + 1).is_empty());
        assert!(Sampler::new().sample("2x +", 0.0, 1.0, usize::MAX).is_empty());
    }

    #[test]
    fn test_sub_ulp_steps_skip_collapsed_points() {
        let samples = sample_grid("x", 1e16, 1e16 + 4.0, 8);
        assert!(samples.len() < 9);
        assert_eq!(samples[0].x, 1e16);
        assert_eq!(samples.last().unwrap().x, 1e16 + 4.0);
        assert_strictly_increasing(&samples);
    }

    #[test]
    fn test_includes_both_endpoints() {
        let samples = sample("x", -1.0, 1.0, 4);
        let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(samples.iter().all(|s| s.y == s.x));
    }

    #[test]
    fn test_drops_singular_point() {
        let samples = sample_grid("1/x", -1.0, 1.0, 4);
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|s| s.x != 0.0));
        let indices: Vec<usize> = samples.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_drops_nan_domain_errors() {
        let samples = sample("sqrt(x)", -1.0, 1.0, 4);
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| s.x >= 0.0));
    }

    #[test]
    fn test_undefined_everywhere_yields_empty() {
        assert!(sample("log(x)", -10.0, -1.0, 50).is_empty());
        assert!(sample("x + y", -1.0, 1.0, 10).is_empty());
    }

    #[test]
    fn test_malformed_text_zero_sentinel() {
        let samples = sample("x +", 0.0, 1.0, 10);
        assert_eq!(samples.len(), 11);
        assert!(samples.iter().all(|s| s.y == 0.0));
    }

    #[test]
    fn test_malformed_text_omit_policy() {
        let sampler = Sampler::with_policy(MalformedPolicy::Omit);
        assert!(sampler.sample("x +", 0.0, 1.0, 10).is_empty());
        assert_eq!(sampler.sample("x", 0.0, 1.0, 10).len(), 11);
    }

    #[test]
    fn test_invalid_domain_and_steps() {
        assert!(sample("x", 1.0, 1.0, 10).is_empty());
        assert!(sample("x", 2.0, 1.0, 10).is_empty());
        assert!(sample("x", 0.0, 1.0, 0).is_empty());
        assert!(sample("x", f64::NEG_INFINITY, 1.0, 10).is_empty());
    }

    #[test]
    fn test_abscissae_stay_within_bounds() {
        let samples = sample("x", -1.0, 1.0, 98);
        assert_eq!(samples.len(), 99);
        assert_eq!(samples[0].x, -1.0);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(&s.x)));
        assert!(samples.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_closure_evaluator_errors_are_skipped() {
        let mut evaluator = FnEvaluator(|x: f64| {
            if x < 0.0 {
                Err(EvalError::UndefinedVariable("t".into()))
            } else {
                Ok(2.0 * x)
            }
        });
        let samples = sample_with(&mut evaluator, -1.0, 1.0, 2);
        assert_eq!(samples.len(), 2);
        assert_relative_eq!(samples[1].y, 2.0);
    }

    #[test]
    fn test_pair_by_index_realigns() {
        let f = sample_grid("x^2", -1.0, 1.0, 4);
        let df = sample_grid("1/x", -1.0, 1.0, 4);
        assert_eq!(f.len(), 5);
        assert_eq!(df.len(), 4);

        let pairs = pair_by_index(&f, &df);
        assert_eq!(pairs.len(), 4);
        for (a, b) in &pairs {
            assert_eq!(a.index, b.index);
            assert_eq!(a.x, b.x);
        }
    }

    #[test]
    fn test_find_nearest() {
        let samples = sample("x", 0.0, 1.0, 10);
        let hit = find_nearest(&samples, 0.52, 0.1).unwrap();
        assert_relative_eq!(hit.x, 0.5);
        assert!(find_nearest(&samples, 5.0, 0.1).is_none());
    }
}
