use clap::Parser;
use shared::config::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL};
use shared::io::DEFAULT_DATA_DIR;
use shared::{
    init_logging, resolve_credential, summarizer, Config, DataPaths, Logger, PipelineOptions,
    Provider, SummarizeError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "summarize")]
#[command(about = "Summarize data/input.txt with a hosted model and write data/output.txt")]
struct Args {
    /// Model to summarize with (gemini-*, claude-*)
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Directory holding input.txt, system_prompt.txt and output.txt
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Upper bound on the summary length, in tokens
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_TOKENS)]
    max_output_tokens: u32,

    /// API root to call instead of the provider's (e.g. https://gateway.example/v1beta)
    #[arg(long)]
    api_base_url: Option<String>,

    /// Also print the summary to stdout
    #[arg(short, long)]
    print: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            model: args.model.trim().to_string(),
            data_dir: args.data_dir,
            max_output_tokens: args.max_output_tokens,
            print: args.print,
            api_base_url: args.api_base_url,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let logger = init_logging(args.verbose).with_prefix("[summarize]");

    if let Err(e) = run(args.into(), &logger).await {
        logger.error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: Config, logger: &Logger) -> Result<(), SummarizeError> {
    Config::load_dotenv(logger);

    let provider =
        Provider::from_model(&config.model).ok_or_else(|| SummarizeError::UnsupportedModel {
            model: config.model.clone(),
        })?;

    let credential =
        resolve_credential(&config.model).ok_or_else(|| SummarizeError::MissingCredential {
            model: config.model.clone(),
            env_var: provider.env_var().to_string(),
        })?;

    logger.debug(&format!(
        "Using {} model {} ({} set)",
        provider.name(),
        config.model,
        credential.env_var
    ));

    let summarizer =
        summarizer::for_model(&config.model, &credential, config.api_base_url.as_deref())
            .map_err(|source| SummarizeError::Generation { source })?;

    let paths = DataPaths::new(&config.data_dir);
    let options = PipelineOptions {
        max_output_tokens: config.max_output_tokens,
        print: config.print,
    };

    shared::run_pipeline(&paths, summarizer.as_ref(), &options, logger).await?;

    Ok(())
}
