use super::handlers::get_sample_products::{__path_get_sample_products, get_sample_products};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_sample_products))]
pub struct SampleProductApiDoc;

pub fn sample_product_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/sample-data", state.args.server.root_path),
        get(get_sample_products),
    )
}
