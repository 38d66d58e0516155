// tests/support/builders.rs
use safedocgen_blog::domain::post::*;

pub struct PostBuilder {
    slug: String,
    title: String,
    excerpt: String,
    author: String,
    category: String,
    read_time: String,
    published_at: String,
    featured: bool,
}

impl PostBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: format!("Post {slug}"),
            slug,
            excerpt: "A short summary of the post.".into(),
            author: "SafeDocGen Team".into(),
            category: "Compliance".into(),
            read_time: "5 min read".into(),
            published_at: "2024-01-15".into(),
            featured: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = published_at.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn build(self) -> Post {
        Post {
            slug: PostSlug::new(self.slug).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            excerpt: PostExcerpt::new(self.excerpt).unwrap(),
            author: PostAuthor::new(self.author).unwrap(),
            category: PostCategory::new(self.category).unwrap(),
            read_time: ReadTime::new(self.read_time).unwrap(),
            published_at: PublishedAt::parse(self.published_at).unwrap(),
            featured: self.featured,
        }
    }
}
