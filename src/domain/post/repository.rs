// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::filter::{PageRequest, PostFilter};
use crate::domain::post::value_objects::PostSlug;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is taken.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Fails with `DomainError::NotFound` when nothing was removed.
    async fn delete_by_slug(&self, slug: &PostSlug) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// One page of matching posts plus the number of matches across all pages.
    async fn list_page(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
