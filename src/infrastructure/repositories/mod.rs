// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory;
mod record;

pub use in_memory::InMemoryPostRepository;
pub use record::{PostRecord, parse_posts};
