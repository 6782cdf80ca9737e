use std::path::PathBuf;
use thiserror::Error;

/// Every way a summarize run can fail. All of them are fatal.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading {label} ({}): {source}", path.display())]
    ReadError {
        label: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The {label} is empty: {}", path.display())]
    EmptyContent { label: String, path: PathBuf },

    #[error("Error writing summary to {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{env_var} not found for model {model}. Set it in the environment or a .env file before running")]
    MissingCredential { model: String, env_var: String },

    #[error("Unsupported model: {model}. Use a gemini-* or claude-* model")]
    UnsupportedModel { model: String },

    #[error("No summary generated")]
    EmptyResult,

    #[error("Summary generation failed: {source:#}")]
    Generation {
        #[source]
        source: anyhow::Error,
    },
}

impl SummarizeError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
