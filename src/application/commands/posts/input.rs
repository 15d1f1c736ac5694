// src/application/commands/posts/input.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::{AuthorName, PostCategory, PostContent, PostFields, PostTags, PostTitle},
};

/// Raw editable fields as received from a client, shared by create and
/// update.
#[derive(Debug, Clone)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub featured: bool,
    pub published: bool,
}

impl PostInput {
    pub fn into_fields(self) -> ApplicationResult<PostFields> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("author_name", &self.author_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(ApplicationError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(PostFields {
            title: PostTitle::new(self.title)?,
            content: PostContent::new(self.content)?,
            author_name: AuthorName::new(self.author_name)?,
            tags: PostTags::new(&self.tags)?,
            category: PostCategory::parse(self.category)?,
            featured: self.featured,
            published: self.published,
        })
    }
}
