// src/application/services/mod.rs
use std::sync::Arc;

use crate::{application::queries::posts::BlogQueryService, domain::post::PostReadRepository};

pub struct ApplicationServices {
    pub blog_queries: Arc<BlogQueryService>,
}

impl ApplicationServices {
    pub fn new(post_repo: Arc<dyn PostReadRepository>) -> Self {
        let blog_queries = Arc::new(BlogQueryService::new(post_repo));
        Self { blog_queries }
    }
}
