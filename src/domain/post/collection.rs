// src/domain/post/collection.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::PostCategory;
use std::collections::HashSet;

/// Ordered set of posts with unique slugs.
#[derive(Debug, Clone, Default)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    pub fn new(posts: Vec<Post>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(DomainError::Conflict(format!(
                    "duplicate post slug `{}`",
                    post.slug
                )));
            }
        }
        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn featured(&self) -> Vec<Post> {
        featured_posts(&self.posts)
    }

    pub fn categories(&self) -> Vec<PostCategory> {
        distinct_categories(&self.posts)
    }
}

/// Posts flagged as featured, in source order.
pub fn featured_posts(posts: &[Post]) -> Vec<Post> {
    posts.iter().filter(|post| post.is_featured()).cloned().collect()
}

/// Distinct categories in order of first appearance.
pub fn distinct_categories(posts: &[Post]) -> Vec<PostCategory> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .filter(|post| seen.insert(post.category.as_str()))
        .map(|post| post.category.clone())
        .collect()
}
