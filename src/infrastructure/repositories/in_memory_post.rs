// src/infrastructure/repositories/in_memory_post.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::filter::listing_order;
use crate::domain::post::{
    NewPost, PageRequest, Post, PostFilter, PostId, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local post store backing the demo data source and the tests.
///
/// Mirrors the Postgres repository: slugs are unique, listing order and
/// counting follow the same rules, updates are guarded by `updated_at`.
#[derive(Default)]
pub struct InMemoryPostRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    last_id: i64,
}

impl State {
    fn insert(&mut self, post: NewPost) -> DomainResult<Post> {
        if self.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict(
                "blog post with this slug already exists".into(),
            ));
        }

        let id = PostId::new(self.last_id + 1)?;
        self.last_id = id.0;
        let stored = Post {
            id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            excerpt: post.excerpt,
            author_name: post.author_name,
            tags: post.tags,
            category: post.category,
            featured: post.featured,
            published: post.published,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        self.posts.push(stored.clone());
        Ok(stored)
    }
}

fn poisoned() -> DomainError {
    DomainError::Persistence("post store lock poisoned".into())
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `posts`, in order.
    pub fn with_posts(posts: impl IntoIterator<Item = NewPost>) -> DomainResult<Self> {
        let mut state = State::default();
        for post in posts {
            state.insert(post)?;
        }
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.posts.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|_| poisoned())
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(|_| poisoned())
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.write()?.insert(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.write()?;
        let stored = state
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(DomainError::post_not_found)?;
        if stored.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "blog post was modified concurrently, please retry".into(),
            ));
        }

        stored.title = update.title;
        stored.content = update.content;
        stored.excerpt = update.excerpt;
        stored.author_name = update.author_name;
        stored.tags = update.tags;
        stored.category = update.category;
        stored.featured = update.featured;
        stored.published = update.published;
        stored.published_at = update.published_at;
        stored.updated_at = update.updated_at;
        Ok(stored.clone())
    }

    async fn delete_by_slug(&self, slug: &PostSlug) -> DomainResult<()> {
        let mut state = self.write()?;
        let before = state.posts.len();
        state.posts.retain(|p| &p.slug != slug);
        if state.posts.len() == before {
            return Err(DomainError::post_not_found());
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self.read()?.posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let state = self.read()?;
        let mut matching: Vec<&Post> = state.posts.iter().filter(|p| filter.matches(p)).collect();
        matching.sort_by(|a, b| listing_order(a, b));

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let per_page = usize::try_from(page.per_page()).unwrap_or(usize::MAX);
        let posts = matching
            .into_iter()
            .skip(offset)
            .take(per_page)
            .cloned()
            .collect();
        Ok((posts, total))
    }
}
