// tests/support/helpers.rs
use axum::body;
use axum::response::Response;
use safedocgen_blog::application::services::ApplicationServices;
use safedocgen_blog::domain::post::{Post, PostReadRepository};
use safedocgen_blog::infrastructure::repositories::InMemoryPostRepository;
use safedocgen_blog::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

pub fn build_test_state(repo: Arc<dyn PostReadRepository>, base_path: &str) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(repo)),
        base_path: Arc::from(base_path),
        cache_max_age_secs: 300,
    }
}

pub fn make_test_router(posts: Vec<Post>) -> axum::Router {
    let repo = InMemoryPostRepository::from_posts(posts).expect("valid posts");
    build_router(build_test_state(Arc::new(repo), "/blog"))
}

pub fn make_test_router_with_repo(
    repo: Arc<dyn PostReadRepository>,
    base_path: &str,
) -> axum::Router {
    build_router(build_test_state(repo, base_path))
}

/// Split a response into its headers' content-type and body text.
pub async fn read_response(resp: Response) -> (String, String) {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    (content_type, String::from_utf8_lossy(&bytes).into_owned())
}
