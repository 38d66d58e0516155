use std::sync::Arc;

use crate::domain::post::PostReadRepository;

pub struct BlogQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
}

impl BlogQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }
}
