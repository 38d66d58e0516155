pub mod collection;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use collection::PostCollection;
pub use entity::Post;
pub use repository::PostReadRepository;
pub use value_objects::{
    PostAuthor, PostCategory, PostExcerpt, PostSlug, PostTitle, PublishedAt, ReadTime,
};
