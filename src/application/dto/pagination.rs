use super::PostDto;
use crate::domain::post::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page-numbered envelope returned by the post listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPage {
    pub posts: Vec<PostDto>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_posts: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PostPage {
    pub fn new(posts: Vec<PostDto>, page: PageRequest, total_posts: u64) -> Self {
        let current_page = page.page();
        let total_pages = page.total_pages(total_posts);
        Self {
            posts,
            current_page,
            total_pages,
            total_posts,
            has_next: current_page < total_pages,
            has_prev: current_page > 1,
        }
    }
}
