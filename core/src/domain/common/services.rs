use std::sync::Arc;

use crate::domain::{common::LLMConfig, ingredient_analysis::ports::LLMClient};

pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_config: Arc<LLMConfig>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_config: LLMConfig, llm_client: LLM) -> Self {
        Self {
            llm_config: Arc::new(llm_config),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_config: self.llm_config.clone(),
            llm_client: self.llm_client.clone(),
        }
    }
}
