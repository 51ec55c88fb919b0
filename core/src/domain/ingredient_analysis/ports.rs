use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient_analysis::{entities::IngredientAnalysis, value_objects::AnalyzeIngredientsInput},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` to the named model and returns the raw text it produced.
    fn generate_with_text(
        &self,
        model: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for ingredient analysis business logic
pub trait IngredientAnalysisService: Send + Sync {
    /// Only [`CoreError::InvalidInput`] is ever returned; every other failure
    /// resolves to a fallback [`IngredientAnalysis`].
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<IngredientAnalysis, CoreError>> + Send;
}
