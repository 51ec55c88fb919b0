use crate::domain::{
    common::{attempts::first_success, entities::app_errors::CoreError, services::Service},
    ingredient_analysis::{
        entities::IngredientAnalysis,
        helpers::parse_analysis,
        ports::{IngredientAnalysisService, LLMClient},
        prompt::build_analysis_prompt,
        schema::get_ingredient_analysis_schema,
        value_objects::AnalyzeIngredientsInput,
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_analysis(&self, text: &str) -> Result<IngredientAnalysis, CoreError> {
        let prompt = build_analysis_prompt(text);
        let response_schema = get_ingredient_analysis_schema();

        first_success(&self.llm_config.candidate_models, |model| {
            let prompt = prompt.clone();
            let response_schema = response_schema.clone();
            let model = model.clone();

            async move {
                let raw_response = self
                    .llm_client
                    .generate_with_text(model, prompt, response_schema)
                    .await?;

                parse_analysis(&raw_response)
            }
        })
        .await
    }
}

impl<LLM> IngredientAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> Result<IngredientAnalysis, CoreError> {
        if input.text.is_empty() {
            return Err(CoreError::InvalidInput);
        }

        if !self.llm_config.has_credential() {
            tracing::warn!("GOOGLE_API_KEY is not configured, returning mock analysis");
            return Ok(IngredientAnalysis::without_credential());
        }

        match self.generate_analysis(&input.text).await {
            Ok(analysis) => Ok(analysis),
            Err(e) => {
                tracing::error!("Error in AI analysis: {}", e);
                Ok(IngredientAnalysis::from_failure(&e))
            }
        }
    }
}
