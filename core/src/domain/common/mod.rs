use std::time::Duration;

pub mod attempts;
pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const DEFAULT_CANDIDATE_MODELS: [&str; 4] = [
    "gemini-1.5-flash",
    "gemini-1.5-pro",
    "gemini-pro",
    "models/gemini-1.5-flash",
];

#[derive(Clone, Debug)]
pub struct CopilotConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    /// Model names tried in order until one answers with a usable analysis.
    pub candidate_models: Vec<String>,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl LLMConfig {
    /// A blank key counts as no key.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn has_credential(&self) -> bool {
        self.api_key().is_some()
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            candidate_models: DEFAULT_CANDIDATE_MODELS
                .iter()
                .map(|model| model.to_string())
                .collect(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
