use axum::extract::State;
use ingredient_copilot_core::domain::sample_product::{
    entities::SampleProduct, ports::SampleProductService,
};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/sample-data",
    tag = "sample-data",
    summary = "List sample products",
    description = "Returns a fixed set of products with their ingredient lists, handy for trying an analysis.",
    responses(
        (status = 200, body = Vec<SampleProduct>)
    )
)]
pub async fn get_sample_products(State(state): State<AppState>) -> Response<Vec<SampleProduct>> {
    Response::OK(state.service.get_sample_products())
}
