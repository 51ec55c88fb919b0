use crate::domain::{
    common::entities::app_errors::CoreError, ingredient_analysis::entities::IngredientAnalysis,
};

/// Strips a surrounding Markdown code fence, if the model added one.
pub fn extract_json_payload(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the info string, e.g. ```json
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

/// Parses a raw model reply into the five analysis fields.
pub fn parse_analysis(raw_response: &str) -> Result<IngredientAnalysis, CoreError> {
    serde_json::from_str(extract_json_payload(raw_response)).map_err(|e| {
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
    })
}
