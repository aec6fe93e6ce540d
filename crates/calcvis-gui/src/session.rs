//! Submission state, kept apart from egui so it can be tested headless.

use calcvis_color::ColorScheme;
use calcvis_oracle::AnalysisResult;
use calcvis_plot::PlotInput;

pub const BLANK_INPUT_MESSAGE: &str = "Please enter a mathematical expression";
pub const FAILED_MESSAGE: &str =
    "Failed to process the mathematical expression. Please try a different one.";

/// Outcome of one analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub expression: String,
    pub result: Option<AnalysisResult>,
}

#[derive(Debug, Default)]
pub struct Session {
    pub input: String,
    pub scheme: ColorScheme,
    /// Requests sent but not yet answered.
    pub pending: usize,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl Session {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    /// Validate the current input. Returns the text to analyse, or `None`
    /// after recording the blank-input message.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            self.error = Some(BLANK_INPUT_MESSAGE.to_string());
            return None;
        }
        self.error = None;
        self.pending += 1;
        Some(self.input.clone())
    }

    /// Apply a reply. Replies are applied in arrival order, so the last one
    /// to resolve wins even if it was submitted first.
    pub fn apply(&mut self, reply: Reply) {
        self.pending = self.pending.saturating_sub(1);
        match reply.result {
            Some(result) => {
                self.result = Some(result);
                self.error = None;
            }
            None => self.error = Some(FAILED_MESSAGE.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn toggle_scheme(&mut self) {
        self.scheme = self.scheme.toggled();
    }

    /// What the canvas should show, if anything has been analysed yet.
    pub fn plot_input(&self) -> Option<PlotInput> {
        self.result
            .as_ref()
            .map(|result| PlotInput::from_analysis(result, self.scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(expression: &str) -> Reply {
        Reply {
            expression: expression.to_string(),
            result: Some(AnalysisResult::fallback(expression)),
        }
    }

    #[test]
    fn test_blank_submit_is_rejected() {
        let mut session = Session::default();
        session.input = "   ".to_string();

        assert_eq!(session.submit(), None);
        assert_eq!(session.error.as_deref(), Some(BLANK_INPUT_MESSAGE));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_submit_keeps_text_verbatim() {
        let mut session = Session::default();
        session.input = " sin(x) ".to_string();
        assert_eq!(session.submit().as_deref(), Some(" sin(x) "));
        assert!(session.is_loading());
    }

    #[test]
    fn test_last_reply_wins() {
        let mut session = Session::default();
        session.input = "x^2".to_string();
        session.submit();
        session.input = "sin(x)".to_string();
        session.submit();

        // The second request resolves first.
        session.apply(reply("sin(x)"));
        assert!(session.is_loading());
        session.apply(reply("x^2"));

        assert!(!session.is_loading());
        assert_eq!(session.result.as_ref().unwrap().parsed, "x^2");
    }

    #[test]
    fn test_none_result_keeps_previous_plot() {
        let mut session = Session::default();
        session.input = "x".to_string();
        session.submit();
        session.apply(reply("x"));

        session.submit();
        session.apply(Reply {
            expression: "x".to_string(),
            result: None,
        });

        assert_eq!(session.error.as_deref(), Some(FAILED_MESSAGE));
        assert!(session.result.is_some());
    }

    #[test]
    fn test_plot_input_follows_scheme() {
        let mut session = Session::new(ColorScheme::Light);
        assert!(session.plot_input().is_none());

        session.result = Some(AnalysisResult::fallback("x"));
        session.toggle_scheme();
        assert_eq!(session.plot_input().unwrap().scheme, ColorScheme::Dark);
    }
}
