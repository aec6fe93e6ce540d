use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} - Body: {body}")]
    Http { status: u16, body: String },

    #[error("response contained no candidate text")]
    EmptyResponse,

    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
