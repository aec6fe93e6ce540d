//! Structured result of analysing one expression.

use calcvis_color::{CriticalKind, CriticalPoint};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Domain and range used when the service gives none that is usable.
pub const DEFAULT_INTERVAL: [f64; 2] = [-10.0, 10.0];

/// Decoding is deliberately forgiving: missing or ill-typed intervals fall
/// back to [`DEFAULT_INTERVAL`], unusable critical points are skipped and
/// non-string text fields are stringified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub parsed: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub derivative: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub integral: String,
    #[serde(default = "default_interval", deserialize_with = "lenient_interval")]
    pub domain: [f64; 2],
    #[serde(default = "default_interval", deserialize_with = "lenient_interval")]
    pub range: [f64; 2],
    #[serde(default, deserialize_with = "lenient_points")]
    pub critical_points: Vec<CriticalPoint>,
}

impl AnalysisResult {
    /// Substitute shown when the service fails. Keeps the plot renderable:
    /// the derivative is `x^2` and a single minimum sits at the origin.
    pub fn fallback(expression: &str) -> Self {
        Self {
            parsed: expression.to_string(),
            derivative: "x^2".to_string(),
            integral: "x^3/3".to_string(),
            domain: DEFAULT_INTERVAL,
            range: DEFAULT_INTERVAL,
            critical_points: vec![CriticalPoint::new(0.0, CriticalKind::Minimum)],
        }
    }

    /// Result for a reply that contained no JSON object at all.
    pub fn unparsed(expression: &str) -> Self {
        Self {
            parsed: expression.to_string(),
            derivative: "Could not compute derivative".to_string(),
            integral: "Could not compute integral".to_string(),
            domain: DEFAULT_INTERVAL,
            range: DEFAULT_INTERVAL,
            critical_points: Vec::new(),
        }
    }
}

fn default_interval() -> [f64; 2] {
    DEFAULT_INTERVAL
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Each bound is kept if it is a finite number; an inverted or empty
/// interval is replaced wholesale.
fn lenient_interval<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[f64; 2], D::Error> {
    let value = Value::deserialize(deserializer)?;
    let bounds = match value.as_array() {
        Some(items) if items.len() == 2 => items,
        _ => return Ok(DEFAULT_INTERVAL),
    };

    let lo = as_number(&bounds[0]).unwrap_or(DEFAULT_INTERVAL[0]);
    let hi = as_number(&bounds[1]).unwrap_or(DEFAULT_INTERVAL[1]);

    Ok(if lo < hi { [lo, hi] } else { DEFAULT_INTERVAL })
}

fn lenient_points<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<CriticalPoint>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .iter()
        .filter_map(|item| {
            let x = as_number(item.get("x")?)?;
            let kind = item
                .get("type")
                .and_then(Value::as_str)
                .map(CriticalKind::from_label)
                .unwrap_or(CriticalKind::Inflection);
            Some(CriticalPoint::new(x, kind))
        })
        .collect())
}
