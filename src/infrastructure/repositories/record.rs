// src/infrastructure/repositories/record.rs
use super::error::map_json;
use crate::domain::errors::DomainResult;
use crate::domain::post::{
    Post, PostAuthor, PostCategory, PostCollection, PostExcerpt, PostSlug, PostTitle,
    PublishedAt, ReadTime,
};
use serde::Deserialize;

/// On-disk shape of a post. Field names follow the camelCase used by the
/// marketing site's data files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    pub published_at: String,
    #[serde(default)]
    pub featured: bool,
}

impl TryFrom<PostRecord> for Post {
    type Error = crate::domain::errors::DomainError;

    fn try_from(record: PostRecord) -> DomainResult<Self> {
        Ok(Self {
            slug: PostSlug::new(record.slug)?,
            title: PostTitle::new(record.title)?,
            excerpt: PostExcerpt::new(record.excerpt)?,
            author: PostAuthor::new(record.author)?,
            category: PostCategory::new(record.category)?,
            read_time: ReadTime::new(record.read_time)?,
            published_at: PublishedAt::parse(record.published_at)?,
            featured: record.featured,
        })
    }
}

/// Parse a JSON array of post records into a validated collection.
pub fn parse_posts(json: &str) -> DomainResult<PostCollection> {
    let records: Vec<PostRecord> = serde_json::from_str(json).map_err(map_json)?;
    let posts = records
        .into_iter()
        .map(Post::try_from)
        .collect::<DomainResult<Vec<_>>>()?;
    PostCollection::new(posts)
}
