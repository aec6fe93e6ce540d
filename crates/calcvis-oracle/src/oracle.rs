use crate::error::OracleError;
use futures::future::BoxFuture;

/// A text-completion service.
///
/// Implementations are constructed explicitly and handed to the
/// [`Analyzer`](crate::Analyzer), so tests can substitute a canned reply.
pub trait Oracle: Send + Sync {
    /// Send `prompt` and return the raw reply text.
    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, OracleError>>;
}

/// Stands in when no service is configured. Every call fails, so the
/// analyzer always serves its fallback.
#[derive(Debug, Clone)]
pub struct UnavailableOracle {
    reason: String,
}

impl UnavailableOracle {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Oracle for UnavailableOracle {
    fn complete<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, OracleError>> {
        let reason = self.reason.clone();
        Box::pin(async move { Err(OracleError::Unavailable(reason)) })
    }
}
