// src/infrastructure/repositories/in_memory.rs
use super::error::map_io;
use super::record::parse_posts;
use crate::domain::errors::DomainResult;
use crate::domain::post::{Post, PostCategory, PostCollection, PostReadRepository};
use async_trait::async_trait;
use std::path::Path;

const BUILTIN_POSTS: &str = include_str!("../../../data/posts.json");

/// Post source held entirely in memory, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    collection: PostCollection,
}

impl InMemoryPostRepository {
    pub fn new(collection: PostCollection) -> Self {
        Self { collection }
    }

    pub fn from_posts(posts: Vec<Post>) -> DomainResult<Self> {
        PostCollection::new(posts).map(Self::new)
    }

    /// The posts bundled with the binary.
    pub fn builtin() -> DomainResult<Self> {
        parse_posts(BUILTIN_POSTS).map(Self::new)
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| map_io(&err, path))?;
        let collection = parse_posts(&json)?;
        tracing::debug!(path = %path.display(), posts = collection.len(), "loaded posts file");
        Ok(Self::new(collection))
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn list_all_posts(&self) -> DomainResult<Vec<Post>> {
        Ok(self.collection.posts().to_vec())
    }

    async fn list_featured_posts(&self) -> DomainResult<Vec<Post>> {
        Ok(self.collection.featured())
    }

    async fn list_categories(&self) -> DomainResult<Vec<PostCategory>> {
        Ok(self.collection.categories())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use std::io::Write;

    #[test]
    fn builtin_posts_are_valid() {
        let repo = InMemoryPostRepository::builtin().unwrap();
        assert!(!repo.is_empty());
    }

    #[tokio::test]
    async fn builtin_posts_have_featured_and_categories() {
        let repo = InMemoryPostRepository::builtin().unwrap();

        let featured = repo.list_featured_posts().await.unwrap();
        let categories = repo.list_categories().await.unwrap();

        assert!(!featured.is_empty());
        assert!(featured.iter().all(Post::is_featured));
        assert!(categories.len() <= repo.len());
    }

    #[tokio::test]
    async fn loads_posts_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"slug":"gdpr-guide","title":"GDPR","excerpt":"e","author":"A",
                "category":"Compliance","readTime":"5 min read",
                "publishedAt":"2024-01-15","featured":true}}]"#
        )
        .unwrap();

        let repo = InMemoryPostRepository::from_json_file(file.path())
            .await
            .unwrap();

        let posts = repo.list_all_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug.as_str(), "gdpr-guide");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = InMemoryPostRepository::from_json_file(dir.path().join("posts.json")).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
