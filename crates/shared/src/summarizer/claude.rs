use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{api_error_message, Summarizer, SummaryRequest, DEFAULT_TEMPERATURE};

/// Anthropic API root
pub const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1";

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: String,
}

pub struct ClaudeSummarizer {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl fmt::Debug for ClaudeSummarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeSummarizer")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClaudeSummarizer {
    pub fn new(api_key: String, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model: model.to_string(),
            base_url: CLAUDE_API_URL.to_string(),
        })
    }

    /// Point at another API root (scheme, host and version path).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/messages", self.base_url)
    }

    fn build_request(&self, request: &SummaryRequest<'_>) -> ClaudeRequest {
        ClaudeRequest {
            model: self.model.clone(),
            max_tokens: request.max_output_tokens,
            temperature: DEFAULT_TEMPERATURE,
            system: request.system_prompt.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: request.document.to_string(),
            }],
        }
    }

    fn extract_text(response: ClaudeResponse) -> String {
        response
            .content
            .into_iter()
            .filter(|c| c.kind.is_empty() || c.kind == "text")
            .map(|c| c.text)
            .collect()
    }
}

#[async_trait]
impl Summarizer for ClaudeSummarizer {
    fn name(&self) -> &str {
        "Claude"
    }

    async fn summarize(&self, request: &SummaryRequest<'_>) -> Result<String> {
        let body = self.build_request(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Claude API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!(
                "Claude API error (HTTP {}): {}",
                status.as_u16(),
                api_error_message(&error_text)
            );
        }

        let claude_response = response
            .json::<ClaudeResponse>()
            .await
            .context("Failed to parse Claude API response")?;

        Ok(Self::extract_text(claude_response))
    }
}
