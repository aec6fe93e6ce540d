//! Google Generative Language API transport.

use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::oracle::Oracle;
use futures::future::BoxFuture;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiOracle {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl GeminiOracle {
    pub fn new(config: &OracleConfig) -> Result<Self, OracleError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(OracleError::MissingApiKey)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key,
            url: generate_url(&config.endpoint, &config.model),
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        info!("requesting analysis from {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(OracleError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!("oracle replied with {} bytes", text.len());
        candidate_text(&text)
    }
}

impl Oracle for GeminiOracle {
    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, OracleError>> {
        Box::pin(self.generate(prompt))
    }
}

fn generate_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    )
}

/// Concatenated text parts of the first candidate.
fn candidate_text(body: &str) -> Result<String, OracleError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        Err(OracleError::EmptyResponse)
    } else {
        Ok(text)
    }
}
