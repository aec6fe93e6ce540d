//! Expression analysis with a guaranteed answer.

use crate::analysis::AnalysisResult;
use crate::extract::extract_json;
use crate::oracle::Oracle;
use crate::prompt::build_prompt;
use log::warn;

pub struct Analyzer {
    oracle: Box<dyn Oracle>,
}

impl Analyzer {
    pub fn new(oracle: Box<dyn Oracle>) -> Self {
        Self { oracle }
    }

    /// Analyse `expression`.
    ///
    /// Returns `None` only for blank input. Every failure after that point
    /// (transport, service error, undecodable reply) yields
    /// [`AnalysisResult::fallback`], which looks like a normal answer.
    pub async fn analyze(&self, expression: &str) -> Option<AnalysisResult> {
        if expression.trim().is_empty() {
            return None;
        }

        let prompt = build_prompt(expression);
        match self.oracle.complete(&prompt).await {
            Ok(reply) => Some(interpret_response(expression, &reply)),
            Err(e) => {
                warn!("analysis of {:?} failed: {}; using fallback", expression, e);
                Some(AnalysisResult::fallback(expression))
            }
        }
    }
}

/// Decode a raw reply.
///
/// No JSON object at all gives [`AnalysisResult::unparsed`]; an object that
/// does not decode gives [`AnalysisResult::fallback`]. An empty `parsed`
/// field is replaced by the input text.
pub fn interpret_response(expression: &str, reply: &str) -> AnalysisResult {
    let json = match extract_json(reply) {
        Some(json) => json,
        None => {
            warn!("reply for {:?} contained no JSON object", expression);
            return AnalysisResult::unparsed(expression);
        }
    };

    match serde_json::from_str::<AnalysisResult>(json) {
        Ok(mut result) => {
            if result.parsed.trim().is_empty() {
                result.parsed = expression.to_string();
            }
            result
        }
        Err(e) => {
            warn!("invalid JSON for {:?}: {}; using fallback", expression, e);
            AnalysisResult::fallback(expression)
        }
    }
}
