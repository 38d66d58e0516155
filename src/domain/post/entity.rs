// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    PostAuthor, PostCategory, PostExcerpt, PostSlug, PostTitle, PublishedAt, ReadTime,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: PostSlug,
    pub title: PostTitle,
    pub excerpt: PostExcerpt,
    pub author: PostAuthor,
    pub category: PostCategory,
    pub read_time: ReadTime,
    pub published_at: PublishedAt,
    pub featured: bool,
}

impl Post {
    pub fn is_featured(&self) -> bool {
        self.featured
    }
}
