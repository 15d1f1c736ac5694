// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::derivation;
use std::fmt;

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 255;
pub const SLUG_MAX_CHARS: usize = 255;
pub const CONTENT_MIN_CHARS: usize = 100;
pub const AUTHOR_NAME_MAX_CHARS: usize = 100;
pub const CATEGORY_MAX_CHARS: usize = 100;
pub const TAGS_STORAGE_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("post id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

/// Implements the accessors shared by the string-backed value objects.
macro_rules! string_value_object {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        let len = value.chars().count();
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
            return Err(DomainError::validation(format!(
                "title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    /// Wrap a title read back from storage. Rows written before the current
    /// length rules are accepted as they are.
    pub fn from_storage(value: String) -> Self {
        Self(value)
    }
}

string_value_object!(PostTitle);

/// Public lookup key of a post.
///
/// Stored slugs are accepted as-is through [`PostSlug::from_storage`];
/// client-supplied ones go through [`PostSlug::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if value.chars().count() > SLUG_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "slug must be at most {SLUG_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn normalized(raw: &str) -> DomainResult<Self> {
        let slug = derivation::slugify(raw);
        if slug.is_empty() {
            return Err(DomainError::validation(
                "slug must contain at least one letter or digit",
            ));
        }
        Self::new(slug)
    }

    pub fn from_storage(value: String) -> Self {
        Self(value)
    }
}

string_value_object!(PostSlug);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("content cannot be empty"));
        }
        if value.chars().count() < CONTENT_MIN_CHARS {
            return Err(DomainError::validation(format!(
                "content must be at least {CONTENT_MIN_CHARS} characters"
            )));
        }
        // Keeps derived excerpts non-empty.
        if derivation::strip_markup(&value).trim().is_empty() {
            return Err(DomainError::validation(
                "content must contain text outside of markup",
            ));
        }
        Ok(Self(value))
    }

    pub fn from_storage(value: String) -> Self {
        Self(value)
    }
}

string_value_object!(PostContent);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("author_name cannot be empty"));
        }
        if value.chars().count() > AUTHOR_NAME_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "author_name must be at most {AUTHOR_NAME_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn from_storage(value: String) -> Self {
        Self(value)
    }
}

string_value_object!(AuthorName);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCategory(String);

impl PostCategory {
    /// Blank input means "no category".
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        let Some(value) = value else {
            return Ok(None);
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > CATEGORY_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "category must be at most {CATEGORY_MAX_CHARS} characters"
            )));
        }
        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn from_storage(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self)
    }
}

string_value_object!(PostCategory);

/// Ordered tag list; persisted as one comma-joined column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostTags(Vec<String>);

impl PostTags {
    pub fn new<I, S>(tags: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = Self(derivation::normalize_tags(tags));
        if tags.to_storage().chars().count() > TAGS_STORAGE_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "tags must fit in {TAGS_STORAGE_MAX_CHARS} characters"
            )));
        }
        Ok(tags)
    }

    pub fn from_storage(raw: &str) -> Self {
        Self(derivation::deserialize_tags(raw))
    }

    pub fn to_storage(&self) -> String {
        derivation::serialize_tags(&self.0)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
