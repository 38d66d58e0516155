// src/presentation/http/routes.rs
use crate::config::HEALTH_PATH;
use crate::presentation::http::controllers::blog;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    let base_path = state.base_path.clone();

    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(&base_path, get(blog::blog_listing_page))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
