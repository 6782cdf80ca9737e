// Public modules
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod summarizer;

// Re-export commonly used types
pub use config::{resolve_credential, Config, Credential, Provider};
pub use error::SummarizeError;
pub use io::{read_document, write_summary, DataPaths};
pub use logging::{init_logging, Logger};
pub use pipeline::{run_pipeline, PipelineOptions};
pub use summarizer::{ClaudeSummarizer, GeminiSummarizer, Summarizer, SummaryRequest};
