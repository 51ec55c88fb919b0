use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Narrative analysis of an ingredient list, as returned to clients.
///
/// Every field is always populated: when the model cannot be reached the
/// fields carry fallback text describing what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    pub what_stands_out: String,
    pub why_it_matters: String,
    pub uncertainty: String,
    pub recommendation: String,
    pub inferred_intent: String,
}

impl IngredientAnalysis {
    /// Placeholder returned when no model credential is configured.
    pub fn without_credential() -> Self {
        Self {
            inferred_intent: "Is this a healthy snack choice?".to_string(),
            what_stands_out: "Mock Analysis: No API Key provided.".to_string(),
            why_it_matters: "I cannot perform real AI analysis without a GOOGLE_API_KEY."
                .to_string(),
            uncertainty: "Everything is uncertain in mock mode.".to_string(),
            recommendation: "Please provide an API key in the .env file.".to_string(),
        }
    }

    pub fn from_failure(error: &CoreError) -> Self {
        Self {
            inferred_intent: "Unable to infer intent".to_string(),
            what_stands_out: format!("Analysis failed: {}", error),
            why_it_matters: "An error occurred during processing.".to_string(),
            uncertainty: "High internal error uncertainty.".to_string(),
            recommendation: "Try again or check your API configuration.".to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_complete(&self) -> bool {
        [
            &self.what_stands_out,
            &self.why_it_matters,
            &self.uncertainty,
            &self.recommendation,
            &self.inferred_intent,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}
