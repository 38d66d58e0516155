// src/presentation/http/controllers/blog.rs
use crate::presentation::html::BlogListingPage;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::header,
    response::{IntoResponse, Response},
};
use maud::Render;

pub async fn blog_listing_page(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let listing = state
        .services
        .blog_queries
        .blog_listing()
        .await
        .into_http()?;

    let markup = BlogListingPage::new(&listing, &state.base_path).render();
    let cache_control = format!("public, max-age={}", state.cache_max_age_secs);

    Ok(([(header::CACHE_CONTROL, cache_control)], markup).into_response())
}
