// tests/support/mocks.rs
use async_trait::async_trait;
use safedocgen_blog::domain::errors::{DomainError, DomainResult};
use safedocgen_blog::domain::post::{Post, PostReadRepository};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Repository whose source is always unavailable.
pub struct FailingPostRepo;

#[async_trait]
impl PostReadRepository for FailingPostRepo {
    async fn list_all_posts(&self) -> DomainResult<Vec<Post>> {
        Err(DomainError::Persistence("post source unavailable".into()))
    }
}

/// Relies on the trait's derived featured/category operations and counts
/// how often the full list is requested.
pub struct CountingPostRepo {
    posts: Vec<Post>,
    calls: AtomicUsize,
}

impl CountingPostRepo {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostReadRepository for CountingPostRepo {
    async fn list_all_posts(&self) -> DomainResult<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}
