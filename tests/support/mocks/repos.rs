// tests/support/mocks/repos.rs
use blog_core::domain::errors::{DomainError, DomainResult};
use blog_core::domain::post::{
    NewPost, PageRequest, Post, PostFilter, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};

/// Store whose every call fails as if the database were unreachable.
pub struct FailingPostRepo;

fn unreachable_store() -> DomainError {
    DomainError::Persistence("connection refused (os error 111)".into())
}

#[async_trait::async_trait]
impl PostWriteRepository for FailingPostRepo {
    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        Err(unreachable_store())
    }

    async fn update(&self, _update: PostUpdate) -> DomainResult<Post> {
        Err(unreachable_store())
    }

    async fn delete_by_slug(&self, _slug: &PostSlug) -> DomainResult<()> {
        Err(unreachable_store())
    }
}

#[async_trait::async_trait]
impl PostReadRepository for FailingPostRepo {
    async fn find_by_slug(&self, _slug: &PostSlug) -> DomainResult<Option<Post>> {
        Err(unreachable_store())
    }

    async fn list_page(
        &self,
        _filter: &PostFilter,
        _page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        Err(unreachable_store())
    }
}
