// src/domain/post/entity.rs
use crate::domain::post::derivation;
use crate::domain::post::value_objects::{
    AuthorName, PostCategory, PostContent, PostId, PostSlug, PostTags, PostTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: String,
    pub author_name: AuthorName,
    pub tags: PostTags,
    pub category: Option<PostCategory>,
    pub featured: bool,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The client-editable part of a post. Create and update both carry a full
/// set; an update replaces every one of these fields.
#[derive(Debug, Clone)]
pub struct PostFields {
    pub title: PostTitle,
    pub content: PostContent,
    pub author_name: AuthorName,
    pub tags: PostTags,
    pub category: Option<PostCategory>,
    pub featured: bool,
    pub published: bool,
}

impl Post {
    pub fn replace_fields(&mut self, fields: PostFields, now: DateTime<Utc>) {
        let PostFields {
            title,
            content,
            author_name,
            tags,
            category,
            featured,
            published,
        } = fields;
        self.title = title;
        self.content = content;
        self.author_name = author_name;
        self.tags = tags;
        self.category = category;
        self.featured = featured;
        self.published = published;
        self.updated_at = now;
    }

    /// Derive the excerpt from the content when the stored one is blank.
    pub fn ensure_excerpt(&mut self) {
        if self.excerpt.trim().is_empty() {
            self.excerpt = derivation::derive_excerpt(self.content.as_str());
        }
    }

    pub fn stamp_publication(&mut self, now: DateTime<Utc>) {
        self.published_at = derivation::stamp_published_at(self.published, self.published_at, now);
    }

    pub fn is_visible(&self) -> bool {
        self.published
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: String,
    pub author_name: AuthorName,
    pub tags: PostTags,
    pub category: Option<PostCategory>,
    pub featured: bool,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    pub fn new(fields: PostFields, slug: PostSlug, excerpt: String, now: DateTime<Utc>) -> Self {
        let PostFields {
            title,
            content,
            author_name,
            tags,
            category,
            featured,
            published,
        } = fields;
        Self {
            title,
            slug,
            content,
            excerpt,
            author_name,
            tags,
            category,
            featured,
            published,
            published_at: derivation::stamp_published_at(published, None, now),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full replacement of a stored post, guarded by the `updated_at` value the
/// caller read.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub excerpt: String,
    pub author_name: AuthorName,
    pub tags: PostTags,
    pub category: Option<PostCategory>,
    pub featured: bool,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn from_post(post: &Post, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            author_name: post.author_name.clone(),
            tags: post.tags.clone(),
            category: post.category.clone(),
            featured: post.featured,
            published: post.published,
            published_at: post.published_at,
            original_updated_at,
            updated_at: post.updated_at,
        }
    }
}
