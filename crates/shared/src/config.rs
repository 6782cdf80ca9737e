use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::io::DEFAULT_DATA_DIR;
use crate::logging::Logger;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 256;

/// Run configuration, fixed at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub data_dir: PathBuf,
    pub max_output_tokens: u32,
    pub print: bool,
    /// Replaces the provider's API root, e.g. for a gateway
    pub api_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            print: false,
            api_base_url: None,
        }
    }
}

impl Config {
    /// Load API keys from the first `.env` found. Never overrides variables
    /// that are already set.
    pub fn load_dotenv(logger: &Logger) {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        match dotenvy::dotenv() {
            Ok(path) => {
                logger.debug(&format!("Loaded {}", path.display()));
                return;
            }
            Err(e) if !e.not_found() => {
                logger.debug(&format!("Failed to load .env from working directory: {}", e));
            }
            Err(_) => {}
        }

        // 2. ~/.config/summarize/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("summarize").join(".env");
            if config_path.exists() && Self::load_env_file(&config_path, logger) {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                Self::load_env_file(&home_path, logger);
            }
        }
    }

    fn load_env_file(path: &Path, logger: &Logger) -> bool {
        match dotenvy::from_path(path) {
            Ok(()) => {
                logger.debug(&format!("Loaded {}", path.display()));
                true
            }
            Err(e) => {
                logger.debug(&format!("Failed to load {}: {}", path.display(), e));
                false
            }
        }
    }
}

/// Model families with a known API key variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    Claude,
}

/// Model-name prefix to provider. Checked in order.
const PROVIDER_PREFIXES: &[(&str, Provider)] =
    &[("gemini", Provider::Gemini), ("claude", Provider::Claude)];

impl Provider {
    pub fn from_model(model: &str) -> Option<Self> {
        let model = model.trim().to_ascii_lowercase();
        PROVIDER_PREFIXES
            .iter()
            .find(|(prefix, _)| model.starts_with(prefix))
            .map(|(_, provider)| *provider)
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::Claude => "ANTHROPIC_API_KEY",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Claude => "Claude",
        }
    }
}

/// An API key and the variable it came from.
#[derive(Clone)]
pub struct Credential {
    pub provider: Provider,
    pub env_var: &'static str,
    secret: String,
}

impl Credential {
    pub fn new(provider: Provider, secret: impl Into<String>) -> Self {
        Self {
            provider,
            env_var: provider.env_var(),
            secret: secret.into(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("provider", &self.provider)
            .field("env_var", &self.env_var)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Look up the API key for `model` in the process environment.
///
/// Returns `None` for unknown models and for unset or blank variables.
pub fn resolve_credential(model: &str) -> Option<Credential> {
    resolve_credential_with(model, |name| env::var(name).ok())
}

pub fn resolve_credential_with<F>(model: &str, lookup: F) -> Option<Credential>
where
    F: Fn(&str) -> Option<String>,
{
    let provider = Provider::from_model(model)?;
    let secret = lookup(provider.env_var())?;
    if secret.trim().is_empty() {
        return None;
    }
    Some(Credential::new(provider, secret.trim()))
}
