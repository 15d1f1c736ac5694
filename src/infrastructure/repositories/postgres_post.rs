// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorName, NewPost, PageRequest, Post, PostCategory, PostContent, PostFilter, PostId,
    PostReadRepository, PostSlug, PostTags, PostTitle, PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    author_name: String,
    tags: String,
    category: Option<String>,
    featured: bool,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Stored rows are trusted: only the id is checked, and a bad id is a store
/// failure rather than a client error.
impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let id = PostId::new(row.id).map_err(|_| {
            DomainError::Persistence(format!("blog_posts row has invalid id {}", row.id))
        })?;
        Ok(Post {
            id,
            title: PostTitle::from_storage(row.title),
            slug: PostSlug::from_storage(row.slug),
            content: PostContent::from_storage(row.content),
            excerpt: row.excerpt,
            author_name: AuthorName::from_storage(row.author_name),
            tags: PostTags::from_storage(&row.tags),
            category: PostCategory::from_storage(row.category),
            featured: row.featured,
            published: row.published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            excerpt,
            author_name,
            tags,
            category,
            featured,
            published,
            published_at,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO blog_posts (title, slug, content, excerpt, author_name, tags, category, featured, published, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id, title, slug, content, excerpt, author_name, tags, category, featured, published, published_at, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt)
        .bind(author_name.as_str())
        .bind(tags.to_storage())
        .bind(category.map(PostCategory::into_inner))
        .bind(featured)
        .bind(published)
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content,
            excerpt,
            author_name,
            tags,
            category,
            featured,
            published,
            published_at,
            original_updated_at,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, PostRow>(
            "UPDATE blog_posts
             SET title = $1, content = $2, excerpt = $3, author_name = $4, tags = $5, category = $6,
                 featured = $7, published = $8, published_at = $9, updated_at = $10
             WHERE id = $11 AND updated_at = $12
             RETURNING id, title, slug, content, excerpt, author_name, tags, category, featured, published, published_at, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(excerpt)
        .bind(author_name.as_str())
        .bind(tags.to_storage())
        .bind(category.map(PostCategory::into_inner))
        .bind(featured)
        .bind(published)
        .bind(published_at)
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match maybe_row {
            Some(row) => Post::try_from(row),
            None => {
                let still_exists = sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS (SELECT 1 FROM blog_posts WHERE id = $1)",
                )
                .bind(i64::from(id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
                Err(missed_update(still_exists))
            }
        }
    }

    async fn delete_by_slug(&self, slug: &PostSlug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::post_not_found());
        }
        Ok(())
    }
}

/// Error for a guarded update that touched no row: the post was either
/// deleted or rewritten since it was read.
fn missed_update(still_exists: bool) -> DomainError {
    if still_exists {
        DomainError::Conflict("blog post was modified concurrently, please retry".into())
    } else {
        DomainError::post_not_found()
    }
}

fn push_connective(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

impl PostgresPostReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostFilter) {
        let mut has_where = false;

        if filter.published_only {
            push_connective(builder, &mut has_where);
            builder.push("published = TRUE");
        }

        if let Some(pattern) = filter.search_like_pattern() {
            push_connective(builder, &mut has_where);
            let columns = ["title", "content", "excerpt", "tags"];
            builder.push("(");
            for (index, column) in columns.iter().enumerate() {
                if index > 0 {
                    builder.push(" OR ");
                }
                builder.push(format!("LOWER({column}) LIKE "));
                builder.push_bind(pattern.clone());
                builder.push(" ESCAPE '\\'");
            }
            builder.push(")");
        }

        if let Some(category) = filter.category_needle() {
            push_connective(builder, &mut has_where);
            builder.push("LOWER(category) = ");
            builder.push_bind(category);
        }

        if filter.featured_only {
            push_connective(builder, &mut has_where);
            builder.push("featured = TRUE");
        }
    }

    async fn count(&self, filter: &PostFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM blog_posts");
        Self::apply_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn fetch_page(&self, filter: &PostFilter, page: PageRequest) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, slug, content, excerpt, author_name, tags, category, featured, published, published_at, created_at, updated_at FROM blog_posts",
        );
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY published_at DESC NULLS LAST, created_at DESC, id DESC");
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.per_page()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, content, excerpt, author_name, tags, category, featured, published, published_at, created_at, updated_at
             FROM blog_posts WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let total = self.count(filter).await?;
        if page.offset() >= total {
            return Ok((Vec::new(), total));
        }

        let posts = self.fetch_page(filter, page).await?;
        Ok((posts, total))
    }
}
