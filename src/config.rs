// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    posts_path: Option<PathBuf>,
    base_path: String,
    cache_max_age_secs: u64,
    render_output: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_base_path() -> String {
    "/blog".into()
}

fn default_cache_max_age() -> u64 {
    300
}

fn default_render_output() -> PathBuf {
    PathBuf::from("dist/blog/index.html")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            posts_path: None,
            base_path: default_base_path(),
            cache_max_age_secs: default_cache_max_age(),
            render_output: default_render_output(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let posts_path = lookup("BLOG_POSTS_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let base_path = lookup("BLOG_BASE_PATH").unwrap_or_else(default_base_path);
        validate_base_path(&base_path)?;

        let cache_max_age_secs = match lookup("BLOG_CACHE_MAX_AGE_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "BLOG_CACHE_MAX_AGE_SECS must be a non-negative integer, got `{raw}`"
                ))
            })?,
            None => default_cache_max_age(),
        };

        let render_output = lookup("BLOG_RENDER_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(default_render_output);

        Ok(Self {
            listen_addr,
            posts_path,
            base_path,
            cache_max_age_secs,
            render_output,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// JSON file of posts; `None` means the bundled posts.
    pub fn posts_path(&self) -> Option<&PathBuf> {
        self.posts_path.as_ref()
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn cache_max_age_secs(&self) -> u64 {
        self.cache_max_age_secs
    }

    pub fn render_output(&self) -> &PathBuf {
        &self.render_output
    }
}

/// Path reserved by the router for the health check.
pub const HEALTH_PATH: &str = "/health";

fn validate_base_path(path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
        return Err(ConfigError::Invalid(format!(
            "BLOG_BASE_PATH must start with `/` and not end with `/`, got `{path}`"
        )));
    }
    if path.contains(['{', '}'])
        || path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(ConfigError::Invalid(format!(
            "BLOG_BASE_PATH must be a literal path without captures or wildcards, got `{path}`"
        )));
    }
    if path == HEALTH_PATH {
        return Err(ConfigError::Invalid(format!(
            "BLOG_BASE_PATH cannot be `{HEALTH_PATH}`, it is used by the health check"
        )));
    }
    Ok(())
}
