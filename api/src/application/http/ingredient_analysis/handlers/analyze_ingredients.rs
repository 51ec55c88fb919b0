use axum::extract::State;

use crate::application::http::{
    ingredient_analysis::validators::AnalyzeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use ingredient_copilot_core::domain::{
    common::entities::app_errors::CoreError,
    ingredient_analysis::{
        entities::IngredientAnalysis, ports::IngredientAnalysisService,
        value_objects::AnalyzeIngredientsInput,
    },
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "ingredient-analysis",
    summary = "Analyze an ingredient list",
    description = "Explains an ingredient list, or a product name when no list is given. Model failures still answer 200 with fields describing the failure.",
    responses(
        (status = 200, body = IngredientAnalysis),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = AnalyzeIngredientsRequest
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<IngredientAnalysis>, ApiError> {
    let input =
        AnalyzeIngredientsInput::select(payload.ingredients_text, payload.product_name)
            .ok_or(CoreError::InvalidInput)?;

    let analysis = state
        .service
        .analyze_ingredients(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
