// src/domain/post/mod.rs
pub mod derivation;
pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostFields, PostUpdate};
pub use filter::{PageRequest, PostFilter};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{AuthorName, PostCategory, PostContent, PostId, PostSlug, PostTags, PostTitle};
