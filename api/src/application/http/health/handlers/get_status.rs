use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StatusResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service status",
    responses(
        (status = 200, body = StatusResponse)
    )
)]
pub async fn get_status() -> Response<StatusResponse> {
    Response::OK(StatusResponse {
        message: "Ingredient Copilot API is running".to_string(),
    })
}
