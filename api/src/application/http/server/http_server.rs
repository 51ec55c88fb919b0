use std::sync::Arc;

use crate::application::http::{
    health::health_routes, ingredient_analysis::router::ingredient_analysis_routes,
    sample_product::router::sample_product_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

use axum::{Json, Router, routing::get};
use ingredient_copilot_core::{application::create_service, domain::common::CopilotConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{debug, info_span};
use utoipa_scalar::{Scalar, Servable};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config: CopilotConfig = CopilotConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    // Any origin, method and header is accepted.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let root_path = state.args.server.root_path.clone();
    let openapi = ApiDoc::with_root_path(&root_path);
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    debug!("Serving OpenAPI document at {}", api_docs_url);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .route(
            &api_docs_url,
            get(move || async move { Json(openapi) }),
        )
        .merge(health_routes(&root_path))
        .merge(sample_product_routes(state.clone()))
        .merge(ingredient_analysis_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
