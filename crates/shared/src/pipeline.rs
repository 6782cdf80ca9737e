use crate::error::{Result, SummarizeError};
use crate::io::{read_document, write_summary, DataPaths};
use crate::logging::Logger;
use crate::summarizer::{Summarizer, SummaryRequest};

pub const SYSTEM_PROMPT_LABEL: &str = "system prompt file";
pub const INPUT_LABEL: &str = "input file";

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub max_output_tokens: u32,
    /// Echo the summary to stdout as well
    pub print: bool,
}

/// Load prompt and input, summarize once, write the result.
///
/// Returns early on the first failure, so `output.txt` is only touched when
/// the summarizer produced non-empty text.
pub async fn run_pipeline(
    paths: &DataPaths,
    summarizer: &dyn Summarizer,
    options: &PipelineOptions,
    logger: &Logger,
) -> Result<String> {
    let system_prompt = read_document(&paths.system_prompt(), SYSTEM_PROMPT_LABEL, logger)?;
    let document = read_document(&paths.input(), INPUT_LABEL, logger)?;

    logger.info(&format!("Summarizing with {}...", summarizer.name()));

    let request = SummaryRequest {
        system_prompt: &system_prompt,
        document: &document,
        max_output_tokens: options.max_output_tokens,
    };

    let summary = summarizer
        .summarize(&request)
        .await
        .map_err(|source| SummarizeError::Generation { source })?;

    if summary.trim().is_empty() {
        return Err(SummarizeError::EmptyResult);
    }

    write_summary(&paths.output(), &summary, logger)?;

    if options.print {
        println!("{}", summary);
    }

    Ok(summary)
}
