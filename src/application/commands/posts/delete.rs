// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::PostSlug,
};

pub struct DeletePostCommand {
    pub slug: String,
}

impl PostCommandService {
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let slug = PostSlug::new(command.slug).map_err(|_| ApplicationError::post_not_found())?;
        self.write_repo.delete_by_slug(&slug).await?;
        tracing::info!(slug = %slug, "deleted blog post");
        Ok(())
    }
}
