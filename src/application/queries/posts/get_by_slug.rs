use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Detail projection of a published post. Drafts read as not found.
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(query.slug).map_err(|_| ApplicationError::post_not_found())?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.is_visible())
            .ok_or_else(ApplicationError::post_not_found)?;

        Ok(PostDto::detail(post))
    }
}
