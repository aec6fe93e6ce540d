//! Human-readable output.

use calcvis_color::{CriticalKind, CriticalPoint};
use calcvis_oracle::AnalysisResult;
use std::fmt::Write;

pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "f(x)      = {}", result.parsed);
    let _ = writeln!(out, "f'(x)     = {}", result.derivative);
    let _ = writeln!(out, "∫f(x)dx   = {} + C", result.integral);
    let _ = writeln!(out, "Domain    [{}, {}]", result.domain[0], result.domain[1]);
    let _ = writeln!(out, "Range     [{}, {}]", result.range[0], result.range[1]);

    if result.critical_points.is_empty() {
        let _ = writeln!(out, "No critical points found in the specified domain.");
    } else {
        let _ = writeln!(out, "Critical points:");
        for point in &result.critical_points {
            let _ = writeln!(out, "  x = {:.2}: {}", point.x, point.kind);
        }
    }
    out
}

/// Parse `x:kind`, e.g. `-1.5:max` or `0:inflection`.
pub fn parse_point(arg: &str) -> Result<CriticalPoint, String> {
    let (x, kind) = arg
        .rsplit_once(':')
        .ok_or_else(|| format!("expected x:kind, got {:?}", arg))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate {:?}", x))?;
    if !x.is_finite() {
        return Err(format!("x coordinate must be finite, got {}", x));
    }
    Ok(CriticalPoint::new(x, CriticalKind::from_label(kind)))
}
