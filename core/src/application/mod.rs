use crate::{
    domain::common::{CopilotConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type CopilotService = Service<GeminiLLMClient>;

pub fn create_service(config: CopilotConfig) -> Result<CopilotService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    if config.llm.has_credential() {
        tracing::info!(
            candidates = ?config.llm.candidate_models,
            "Gemini client configured"
        );
    } else {
        tracing::warn!("GOOGLE_API_KEY not set, analyses will return mock results");
    }

    Ok(Service::new(config.llm, llm_client))
}
