// src/application/dto/mod.rs
mod posts;

pub use posts::{BlogListingDto, PostDto};
