use super::BlogQueryService;
use crate::application::{
    dto::{BlogListingDto, PostDto},
    error::ApplicationResult,
};
use crate::domain::post::PostCategory;

impl BlogQueryService {
    pub async fn list_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list_all_posts().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    pub async fn list_featured_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list_featured_posts().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<String>> {
        let categories = self.read_repo.list_categories().await?;
        Ok(categories.into_iter().map(PostCategory::into_inner).collect())
    }

    pub async fn blog_listing(&self) -> ApplicationResult<BlogListingDto> {
        let posts = self.list_posts().await?;
        let featured = self.list_featured_posts().await?;
        let categories = self.list_categories().await?;

        tracing::debug!(
            posts = posts.len(),
            featured = featured.len(),
            categories = categories.len(),
            "assembled blog listing"
        );

        Ok(BlogListingDto {
            posts,
            featured,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::domain::errors::{DomainError, DomainResult};
    use crate::domain::post::{
        Post, PostAuthor, PostExcerpt, PostReadRepository, PostSlug, PostTitle, PublishedAt,
        ReadTime,
    };
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedPosts(Vec<Post>);

    #[async_trait]
    impl PostReadRepository for FixedPosts {
        async fn list_all_posts(&self) -> DomainResult<Vec<Post>> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    #[async_trait]
    impl PostReadRepository for Broken {
        async fn list_all_posts(&self) -> DomainResult<Vec<Post>> {
            Err(DomainError::Persistence("source unavailable".into()))
        }
    }

    fn post(slug: &str, category: &str, featured: bool) -> Post {
        Post {
            slug: PostSlug::new(slug).unwrap(),
            title: PostTitle::new(slug.replace('-', " ")).unwrap(),
            excerpt: PostExcerpt::new("excerpt").unwrap(),
            author: PostAuthor::new("SafeDocGen Team").unwrap(),
            category: PostCategory::new(category).unwrap(),
            read_time: ReadTime::new("5 min read").unwrap(),
            published_at: PublishedAt::parse("2024-01-15").unwrap(),
            featured,
        }
    }

    #[tokio::test]
    async fn blog_listing_collects_all_three_views() {
        let repo = FixedPosts(vec![
            post("gdpr-guide", "Compliance", true),
            post("privacy-101", "Privacy", false),
        ]);
        let service = BlogQueryService::new(Arc::new(repo));

        let listing = service.blog_listing().await.unwrap();

        assert_eq!(listing.posts.len(), 2);
        assert_eq!(listing.featured.len(), 1);
        assert_eq!(listing.featured[0].slug, "gdpr-guide");
        assert_eq!(listing.categories, vec!["Compliance", "Privacy"]);
        assert_eq!(listing.posts[0].published_at, "2024-01-15");
    }

    #[tokio::test]
    async fn repository_failures_surface_as_domain_errors() {
        let service = BlogQueryService::new(Arc::new(Broken));

        let err = service.blog_listing().await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Persistence(_))
        ));
    }
}
