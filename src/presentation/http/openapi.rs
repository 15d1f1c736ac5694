// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::PostListParams,
            crate::presentation::http::controllers::posts::PostRequest,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::application::dto::PostDto,
            crate::application::dto::PostPage
        )
    ),
    tags(
        (name = "Posts", description = "Blog post listing and management"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog API",
        description = "Blog post backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

/// Snapshot destination: `OPENAPI_SNAPSHOT_PATH` or [`DEFAULT_SNAPSHOT_PATH`].
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
