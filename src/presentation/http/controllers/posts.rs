// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, PostInput, UpdatePostCommand},
    dto::{PostDto, PostPage},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Listing parameters. Values are kept as text and parsed leniently, so a
/// malformed `page` or `limit` falls back to its default instead of failing.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Page size between 1 and 50 (default 6).
    pub limit: Option<String>,
    /// Case-insensitive text matched against title, content, excerpt and tags.
    pub search: Option<String>,
    /// Case-insensitive exact category.
    pub category: Option<String>,
    /// `true` restricts the listing to featured posts.
    pub featured: Option<String>,
}

impl From<PostListParams> for ListPostsQuery {
    fn from(params: PostListParams) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            search: params.search,
            category: params.category,
            featured: params.featured,
        }
    }
}

const fn default_published() -> bool {
    true
}

/// Editable fields of a post. Missing text fields are reported together as a
/// validation error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_published")]
    pub published: bool,
}

impl From<PostRequest> for PostInput {
    fn from(request: PostRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            author_name: request.author_name,
            tags: request.tags,
            category: request.category,
            featured: request.featured,
            published: request.published,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[serde(flatten)]
    pub post: PostRequest,
    /// Explicit slug; normalised, never suffixed.
    #[serde(default)]
    pub slug: Option<String>,
    /// Explicit excerpt of at most 500 characters.
    #[serde(default)]
    pub excerpt: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Page of published posts (summary projection).", body = PostPage),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<PostListParams>,
) -> HttpResult<Json<PostPage>> {
    state
        .services
        .post_queries
        .list_posts(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Published post (detail projection).", body = PostDto),
        (status = 404, description = "No published post has this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Malformed body or invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        input: payload.post.into(),
        slug: payload.slug,
        excerpt: payload.excerpt,
    };

    let created = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post replaced.", body = PostDto),
        (status = 400, description = "Malformed body or invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Post changed while the update was applied.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    JsonBody(payload): JsonBody<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        slug,
        input: payload.into(),
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 204, description = "Post deleted."),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { slug })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
