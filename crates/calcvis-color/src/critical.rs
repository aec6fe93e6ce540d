use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriticalKind {
    Maximum,
    Minimum,
    Inflection,
}

impl CriticalKind {
    /// Lenient classification of free-form labels such as `"Local maximum"`,
    /// `"min"` or `"inflection point"`. Anything that is neither a maximum nor
    /// a minimum counts as an inflection.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_ascii_lowercase();
        for word in label.split(|c: char| !c.is_ascii_alphanumeric()) {
            if word.starts_with("max") {
                return CriticalKind::Maximum;
            }
            if word.starts_with("min") {
                return CriticalKind::Minimum;
            }
        }
        CriticalKind::Inflection
    }

    pub fn name(self) -> &'static str {
        match self {
            CriticalKind::Maximum => "maximum",
            CriticalKind::Minimum => "minimum",
            CriticalKind::Inflection => "inflection",
        }
    }
}

impl fmt::Display for CriticalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A distinguished abscissa of the plotted function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalPoint {
    pub x: f64,
    #[serde(rename = "type")]
    pub kind: CriticalKind,
}

impl CriticalPoint {
    pub fn new(x: f64, kind: CriticalKind) -> Self {
        Self { x, kind }
    }
}
