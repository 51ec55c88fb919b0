use crate::application::http::{
    health::router::HealthApiDoc, ingredient_analysis::router::IngredientAnalysisApiDoc,
    sample_product::router::SampleProductApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Ingredient Copilot API",
    description = "Narrative, reasoning-driven explanations of food ingredient lists"
))]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every route group merged in, paths prefixed with
    /// `root_path`.
    pub fn with_root_path(root_path: &str) -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(HealthApiDoc::openapi());
        openapi.merge(SampleProductApiDoc::openapi());
        openapi.merge(IngredientAnalysisApiDoc::openapi());

        let mut paths = openapi.paths.clone();
        paths.paths = openapi
            .paths
            .paths
            .into_iter()
            .map(|(path, item)| (format!("{}{path}", root_path), item))
            .collect();
        openapi.paths = paths;

        openapi
    }
}
