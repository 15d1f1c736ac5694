// tests/support/helpers.rs
use super::mocks::{FailingPostRepo, FixedClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use blog_core::application::ports::time::Clock;
use blog_core::application::services::ApplicationServices;
use blog_core::config::AppConfig;
use blog_core::domain::post::{PostReadRepository, PostWriteRepository};
use blog_core::infrastructure::repositories::InMemoryPostRepository;
use blog_core::infrastructure::seed::sample_posts;
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

const BODY_LIMIT: usize = 1024 * 1024;

/// Defaults with rate limiting off: `oneshot` requests carry no peer address.
pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "RATE_LIMIT_ENABLED" => Some("false".into()),
        _ => None,
    })
    .expect("test configuration")
}

pub fn build_services<R>(repo: Arc<R>) -> Arc<ApplicationServices>
where
    R: PostReadRepository + PostWriteRepository + 'static,
{
    let write_repo: Arc<dyn PostWriteRepository> = repo.clone();
    let read_repo: Arc<dyn PostReadRepository> = repo;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    Arc::new(ApplicationServices::new(write_repo, read_repo, clock))
}

pub fn make_router_with_repo<R>(repo: Arc<R>) -> axum::Router
where
    R: PostReadRepository + PostWriteRepository + 'static,
{
    let state = HttpState {
        services: build_services(repo),
    };
    build_router(state, &test_config())
}

/// Router over an empty in-memory store.
pub fn make_test_router() -> axum::Router {
    make_router_with_repo(Arc::new(InMemoryPostRepository::new()))
}

/// Router over the six-post sample corpus.
pub fn make_seeded_router() -> axum::Router {
    let repo = InMemoryPostRepository::with_posts(sample_posts().expect("sample corpus"))
        .expect("seeded store");
    make_router_with_repo(Arc::new(repo))
}

pub fn make_failing_router() -> axum::Router {
    make_router_with_repo(Arc::new(FailingPostRepo))
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Send `req` through a clone of `app`, returning status and parsed body.
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, read_json(resp).await)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, BODY_LIMIT)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
