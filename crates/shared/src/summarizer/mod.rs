use anyhow::Result;
use async_trait::async_trait;

use crate::config::{Credential, Provider};

pub mod claude;
pub mod gemini;
#[cfg(test)]
mod test_server;

pub use claude::ClaudeSummarizer;
pub use gemini::GeminiSummarizer;

/// Sampling temperature for every provider
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// What a summarizer is asked to do
#[derive(Debug, Clone, Copy)]
pub struct SummaryRequest<'a> {
    pub system_prompt: &'a str,
    pub document: &'a str,
    pub max_output_tokens: u32,
}

/// One call across to a hosted model. Implementations return whatever text
/// the model produced, possibly empty.
#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    async fn summarize(&self, request: &SummaryRequest<'_>) -> Result<String>;
}

/// Build the summarizer matching the credential's provider.
///
/// `base_url` replaces the provider's public API root when set.
pub fn for_model(
    model: &str,
    credential: &Credential,
    base_url: Option<&str>,
) -> Result<Box<dyn Summarizer>> {
    let summarizer: Box<dyn Summarizer> = match credential.provider {
        Provider::Gemini => {
            let mut gemini = GeminiSummarizer::new(credential.secret().to_string(), model)?;
            if let Some(url) = base_url {
                gemini = gemini.with_base_url(url);
            }
            Box::new(gemini)
        }
        Provider::Claude => {
            let mut claude = ClaudeSummarizer::new(credential.secret().to_string(), model)?;
            if let Some(url) = base_url {
                claude = claude.with_base_url(url);
            }
            Box::new(claude)
        }
    };
    Ok(summarizer)
}

/// `error.message` from a JSON error body, or the body itself.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
