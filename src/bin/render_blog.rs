// src/bin/render_blog.rs
use anyhow::Result;
use safedocgen_blog::{
    bootstrap::{init_tracing, load_post_repository, render_to_file},
    config::AppConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repo = load_post_repository(&config).await?;
    let output = render_to_file(&config, Arc::new(repo)).await?;

    println!("Blog page written to {}", output.display());
    Ok(())
}
