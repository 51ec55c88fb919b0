use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    pub ingredients_text: Option<String>,
    /// Base64 encoded image. Accepted as-is and not used by the analysis.
    pub image_data: Option<String>,
    pub product_name: Option<String>,
}
