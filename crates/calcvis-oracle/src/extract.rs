//! Locating the JSON object inside free-form model output.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\r?\n(.*?)\r?\n[ \t]*```").expect("valid regex")
});

static BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Returns the JSON text of a fenced code block if there is one, otherwise
/// everything from the first `{` to the last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    if let Some(block) = FENCED.captures(text).and_then(|c| c.get(1)) {
        return Some(block.as_str());
    }
    BARE.find(text).map(|m| m.as_str())
}
