use crate::domain::post::Post;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDto {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    /// Raw value from the data source.
    pub published_at: String,
    pub published_on: NaiveDate,
    pub featured: bool,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let published_on = post.published_at.date();
        Self {
            slug: post.slug.into_inner(),
            title: post.title.into_inner(),
            excerpt: post.excerpt.into_inner(),
            author: post.author.into_inner(),
            category: post.category.into_inner(),
            read_time: post.read_time.into_inner(),
            published_at: post.published_at.raw().to_owned(),
            published_on,
            featured: post.featured,
        }
    }
}

/// Everything the listing page needs, fetched in one go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogListingDto {
    pub posts: Vec<PostDto>,
    pub featured: Vec<PostDto>,
    pub categories: Vec<String>,
}
