// src/application/commands/posts/create.rs
use super::{PostCommandService, PostInput};
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{NewPost, PostSlug, derivation},
};

pub struct CreatePostCommand {
    pub input: PostInput,
    /// Explicit slug; derived from the title when absent or blank.
    pub slug: Option<String>,
    /// Explicit excerpt; derived from the content when absent or blank.
    pub excerpt: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let CreatePostCommand {
            input,
            slug,
            excerpt,
        } = command;
        let fields = input.into_fields()?;
        let now = self.clock.now();

        let slug = match slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(requested) => PostSlug::normalized(requested)?,
            None => PostSlug::new(derivation::derive_slug(fields.title.as_str(), now))?,
        };
        let excerpt = derivation::resolve_excerpt(excerpt.as_deref(), fields.content.as_str())?;

        let created = self
            .write_repo
            .insert(NewPost::new(fields, slug, excerpt, now))
            .await?;
        tracing::info!(slug = %created.slug, id = created.id.0, "created blog post");
        Ok(PostDto::detail(created))
    }
}
