use calcvis_color::{ColorScheme, CriticalPoint};
use calcvis_oracle::analysis::DEFAULT_INTERVAL;
use calcvis_oracle::AnalysisResult;

/// Sampling resolution used for both the function and its derivative.
pub const DEFAULT_STEPS: usize = 200;

/// Everything a plot depends on. Any change means a full recompose.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotInput {
    pub expression: String,
    pub derivative: String,
    pub critical_points: Vec<CriticalPoint>,
    pub domain: [f64; 2],
    pub range: [f64; 2],
    pub scheme: ColorScheme,
    pub steps: usize,
}

impl PlotInput {
    pub fn new(expression: impl Into<String>, derivative: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            derivative: derivative.into(),
            critical_points: Vec::new(),
            domain: DEFAULT_INTERVAL,
            range: DEFAULT_INTERVAL,
            scheme: ColorScheme::default(),
            steps: DEFAULT_STEPS,
        }
    }

    /// Plot the analysed expression using the service's derivative, domain,
    /// range and critical points.
    pub fn from_analysis(analysis: &AnalysisResult, scheme: ColorScheme) -> Self {
        Self {
            expression: analysis.parsed.clone(),
            derivative: analysis.derivative.clone(),
            critical_points: analysis.critical_points.clone(),
            domain: analysis.domain,
            range: analysis.range,
            scheme,
            steps: DEFAULT_STEPS,
        }
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_domain(mut self, domain: [f64; 2]) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_range(mut self, range: [f64; 2]) -> Self {
        self.range = range;
        self
    }

    pub fn with_critical_points(mut self, points: Vec<CriticalPoint>) -> Self {
        self.critical_points = points;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fallback_analysis() {
        let analysis = AnalysisResult::fallback("sin(x)");
        let input = PlotInput::from_analysis(&analysis, ColorScheme::Dark);

        assert_eq!(input.expression, "sin(x)");
        assert_eq!(input.derivative, "x^2");
        assert_eq!(input.domain, [-10.0, 10.0]);
        assert_eq!(input.critical_points.len(), 1);
        assert_eq!(input.scheme, ColorScheme::Dark);
        assert_eq!(input.steps, DEFAULT_STEPS);
    }
}
