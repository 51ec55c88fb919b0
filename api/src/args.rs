use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use ingredient_copilot_core::domain::common::{
    CopilotConfig, DEFAULT_GEMINI_BASE_URL, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ingredient-copilot-api", version, about = "Ingredient Copilot API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Without a key every analysis returns the mock result.
    #[arg(long = "google-api-key", env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(
        long = "gemini-models",
        env = "GEMINI_MODELS",
        value_delimiter = ',',
        default_value = "gemini-1.5-flash,gemini-1.5-pro,gemini-pro,models/gemini-1.5-flash"
    )]
    pub models: Vec<String>,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub base_url: String,

    #[arg(long = "gemini-timeout-secs", env = "GEMINI_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for CopilotConfig {
    fn from(args: Args) -> Self {
        CopilotConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.google_api_key,
                candidate_models: args
                    .llm
                    .models
                    .into_iter()
                    .map(|model| model.trim().to_string())
                    .filter(|model| !model.is_empty())
                    .collect(),
                base_url: args.llm.base_url,
                request_timeout: Duration::from_secs(args.llm.timeout_secs),
            },
        }
    }
}
