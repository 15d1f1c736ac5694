use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Public representation of a post.
///
/// List endpoints use the summary projection (`content` absent), single-post
/// endpoints the detail projection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub excerpt: String,
    pub author_name: String,
    pub tags: Vec<String>,
    /// Empty when the post has no category.
    pub category: String,
    pub featured: bool,
    pub published: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn summary(post: Post) -> Self {
        Self::project(post, false)
    }

    pub fn detail(post: Post) -> Self {
        Self::project(post, true)
    }

    fn project(post: Post, include_content: bool) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: include_content.then(|| post.content.into_inner()),
            excerpt: post.excerpt,
            author_name: post.author_name.into_inner(),
            tags: post.tags.into_inner(),
            category: post.category.map(|c| c.into_inner()).unwrap_or_default(),
            featured: post.featured,
            published: post.published,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
