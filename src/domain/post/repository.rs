// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::collection::{distinct_categories, featured_posts};
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::PostCategory;
use async_trait::async_trait;

/// Read-only source of blog posts.
///
/// Only `list_all_posts` is required; the featured subset and the category set
/// are derived from it unless an implementation has a cheaper way.
#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn list_all_posts(&self) -> DomainResult<Vec<Post>>;

    async fn list_featured_posts(&self) -> DomainResult<Vec<Post>> {
        let posts = self.list_all_posts().await?;
        Ok(featured_posts(&posts))
    }

    async fn list_categories(&self) -> DomainResult<Vec<PostCategory>> {
        let posts = self.list_all_posts().await?;
        Ok(distinct_categories(&posts))
    }
}
