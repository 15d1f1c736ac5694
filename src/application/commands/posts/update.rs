// src/application/commands/posts/update.rs
use super::{PostCommandService, PostInput};
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostSlug, PostUpdate},
};

/// Full replacement of the editable fields of the post at `slug`.
pub struct UpdatePostCommand {
    pub slug: String,
    pub input: PostInput,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let UpdatePostCommand { slug, input } = command;
        let slug = PostSlug::new(slug).map_err(|_| ApplicationError::post_not_found())?;
        let mut post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(ApplicationError::post_not_found)?;

        let fields = input.into_fields()?;
        let original_updated_at = post.updated_at;
        let now = self.clock.now();

        post.replace_fields(fields, now);
        post.ensure_excerpt();
        post.stamp_publication(now);

        let updated = self
            .write_repo
            .update(PostUpdate::from_post(&post, original_updated_at))
            .await?;
        tracing::info!(slug = %updated.slug, "updated blog post");
        Ok(PostDto::detail(updated))
    }
}
