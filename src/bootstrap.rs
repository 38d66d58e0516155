// src/bootstrap.rs
use crate::application::services::ApplicationServices;
use crate::config::AppConfig;
use crate::domain::errors::DomainResult;
use crate::domain::post::PostReadRepository;
use crate::infrastructure::repositories::InMemoryPostRepository;
use crate::presentation::html::BlogListingPage;
use crate::presentation::http::state::HttpState;
use anyhow::{Context, Result};
use maud::Render;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Load posts from `BLOG_POSTS_PATH` when set, otherwise the bundled set.
pub async fn load_post_repository(config: &AppConfig) -> DomainResult<InMemoryPostRepository> {
    let repo = match config.posts_path() {
        Some(path) => InMemoryPostRepository::from_json_file(path).await?,
        None => InMemoryPostRepository::builtin()?,
    };
    let source = config
        .posts_path()
        .map_or_else(|| "builtin".to_string(), |p| p.display().to_string());
    tracing::info!(posts = repo.len(), source = %source, "posts loaded");
    Ok(repo)
}

pub fn build_state(config: &AppConfig, repo: InMemoryPostRepository) -> HttpState {
    let services = Arc::new(ApplicationServices::new(Arc::new(repo)));
    HttpState {
        services,
        base_path: Arc::from(config.base_path()),
        cache_max_age_secs: config.cache_max_age_secs(),
    }
}

/// Render the listing page once and write it to `BLOG_RENDER_OUTPUT`,
/// creating missing parent directories. Returns the path written.
pub async fn render_to_file(
    config: &AppConfig,
    repo: Arc<dyn PostReadRepository>,
) -> Result<PathBuf> {
    let services = ApplicationServices::new(repo);
    let listing = services.blog_queries.blog_listing().await?;

    let html = BlogListingPage::new(&listing, config.base_path())
        .render()
        .into_string();

    let output = config.render_output().clone();
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(&output, html)
        .await
        .with_context(|| format!("writing {}", output.display()))?;

    tracing::info!(path = %output.display(), posts = listing.posts.len(), "blog page written");
    Ok(output)
}
