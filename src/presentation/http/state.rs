// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Route of the listing page and prefix of post links.
    pub base_path: Arc<str>,
    pub cache_max_age_secs: u64,
}
