// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory_post;
mod postgres_post;

pub use error::map_sqlx;
pub use in_memory_post::InMemoryPostRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
