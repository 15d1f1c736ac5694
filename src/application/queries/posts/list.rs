use super::PostQueryService;
use crate::{
    application::{
        dto::{PostDto, PostPage},
        error::ApplicationResult,
    },
    domain::post::{PageRequest, PostFilter},
};

/// Raw listing parameters; every field is optional and parsed leniently.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub featured: Option<String>,
}

impl ListPostsQuery {
    pub fn filter(&self) -> PostFilter {
        PostFilter::published()
            .with_search(self.search.as_deref())
            .with_category(self.category.as_deref())
            .with_featured_flag(self.featured.as_deref())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostPage> {
        let filter = query.filter();
        let page = query.page_request();

        let (records, total) = self.read_repo.list_page(&filter, page).await?;

        let posts = records.into_iter().map(PostDto::summary).collect();
        Ok(PostPage::new(posts, page, total))
    }
}
