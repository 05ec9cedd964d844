use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::ParsedQuery;

/// Errors that can occur when parsing a query remotely
///
/// Every variant is recoverable: the caller falls back to the local parser
/// and never surfaces these to the HTTP client.
#[derive(Debug, Error)]
pub enum RemoteParseError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion API returned status {0}")]
    Api(reqwest::StatusCode),

    #[error("completion response carried no content")]
    EmptyResponse,

    #[error("completion content was not a valid parsed query: {0}")]
    InvalidContent(#[from] serde_json::Error),
}

/// Chat-completion client that extracts a structured filter from free text
///
/// Talks to an OpenAI-style `/v1/chat/completions` endpoint with a bearer
/// credential and a bounded timeout; a hung upstream must not stall the
/// local fallback path.
pub struct RemoteParser {
    endpoint: String,
    api_key: String,
    model: String,
    client: Client,
}

impl RemoteParser {
    pub fn new(endpoint: String, api_key: String, model: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            model,
            client,
        }
    }

    /// Ask the completion service for a strict-JSON ParsedQuery
    pub async fn parse(&self, query: &str) -> Result<ParsedQuery, RemoteParseError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a query parser. Return only valid JSON with the specified structure."
                },
                {
                    "role": "user",
                    "content": build_prompt(query)
                }
            ],
            "max_tokens": 200,
            "temperature": 0.3
        });

        tracing::debug!("Sending query to completion endpoint: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteParseError::Api(response.status()));
        }

        let payload: Value = response.json().await?;
        let content = payload
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or(RemoteParseError::EmptyResponse)?;

        Ok(serde_json::from_str(content.trim())?)
    }
}

fn build_prompt(query: &str) -> String {
    format!(
        r#"Parse this lead search query and extract structured information. Return JSON only.

Query: "{query}"

Extract:
- location: city name or state (null if not specified)
- industry: industry category (null if not specified)
- minScore: minimum lead quality score (null if not specified)
- minValue: minimum lead value in dollars (null if not specified)
- priority: HIGH, MEDIUM, LOW, or null
- action: "show", "find", "highlight", "filter"

Example queries:
"Show me tech leads in California over $50k" -> {{"location": "california", "industry": "technology", "minValue": 50000, "action": "show"}}
"Find legal contacts near Dallas with score 70+" -> {{"location": "dallas", "industry": "legal", "minScore": 70, "action": "find"}}

Return only valid JSON:"#
    )
}
