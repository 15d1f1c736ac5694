// tests/e2e_posts.rs
use axum::http::{Method, Request, StatusCode, header};
use axum::body::Body;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;
use support::{
    PostBodyBuilder, assert_error_response, empty_request, json_request, make_failing_router,
    make_test_router, send,
};

const FIXED_SUFFIX: &str = "9800";

async fn create(app: &axum::Router, body: Value) -> Value {
    let (status, json) = send(app, json_request(Method::POST, "/api/posts", &body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json
}

#[tokio::test]
async fn health_reports_ok() {
    let app = make_test_router();
    let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn create_returns_detail_with_derived_fields() {
    let app = make_test_router();
    let post = create(&app, PostBodyBuilder::new("Building Accessible Modals").build()).await;

    assert_eq!(post["slug"], format!("building-accessible-modals-{FIXED_SUFFIX}"));
    assert_eq!(post["published_at"], "2024-02-01T09:30:00Z");
    assert_eq!(post["created_at"], "2024-02-01T09:30:00Z");
    assert_eq!(post["tags"], json!(["accessibility", "testing"]));
    assert_eq!(post["category"], "Accessibility");
    assert!(post["content"].as_str().unwrap().starts_with("<h2>"));

    let excerpt = post["excerpt"].as_str().unwrap();
    assert!(excerpt.starts_with("Building Accessible ModalsAccessible"));
    assert!(!excerpt.contains('<'));
    assert!(excerpt.ends_with("..."));
    assert_eq!(excerpt.chars().count(), 203);
}

#[tokio::test]
async fn supplied_slug_and_excerpt_are_kept() {
    let app = make_test_router();
    let body = PostBodyBuilder::new("Captions and Transcripts")
        .set("slug", json!("  Captions & Transcripts!  "))
        .set("excerpt", json!("  Why every video needs both. "))
        .build();
    let post = create(&app, body).await;
    assert_eq!(post["slug"], "captions-transcripts");
    assert_eq!(post["excerpt"], "Why every video needs both.");

    let (status, fetched) = send(&app, empty_request(Method::GET, "/api/posts/captions-transcripts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Captions and Transcripts");
}

#[tokio::test]
async fn get_unknown_slug_is_not_found() {
    let app = make_test_router();
    let resp = app
        .oneshot(empty_request(Method::GET, "/api/posts/does-not-exist"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn listing_paginates_fourteen_posts() {
    let app = make_test_router();
    for i in 0..14 {
        create(&app, PostBodyBuilder::new(&format!("Pagination post {i:02}")).build()).await;
    }

    let (status, first) = send(&app, empty_request(Method::GET, "/api/posts?page=1&limit=6")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["posts"].as_array().unwrap().len(), 6);
    assert_eq!(first["current_page"], 1);
    assert_eq!(first["total_pages"], 3);
    assert_eq!(first["total_posts"], 14);
    assert_eq!(first["has_next"], true);
    assert_eq!(first["has_prev"], false);
    // Equal timestamps fall back to newest id first.
    assert_eq!(first["posts"][0]["title"], "Pagination post 13");

    let (_, third) = send(&app, empty_request(Method::GET, "/api/posts?page=3&limit=6")).await;
    assert_eq!(third["posts"].as_array().unwrap().len(), 2);
    assert_eq!(third["has_next"], false);
    assert_eq!(third["has_prev"], true);

    let (status, fourth) = send(&app, empty_request(Method::GET, "/api/posts?page=4&limit=6")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fourth["posts"].as_array().unwrap().is_empty());
    assert_eq!(fourth["total_posts"], 14);
}

#[tokio::test]
async fn malformed_page_parameters_fall_back_to_defaults() {
    let app = make_test_router();
    for i in 0..8 {
        create(&app, PostBodyBuilder::new(&format!("Lenient paging {i}")).build()).await;
    }

    let (status, page) = send(&app, empty_request(Method::GET, "/api/posts?page=abc&limit=999")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["posts"].as_array().unwrap().len(), 6);
    assert_eq!(page["total_pages"], 2);
}

#[tokio::test]
async fn listing_uses_summary_projection() {
    let app = make_test_router();
    create(
        &app,
        PostBodyBuilder::new("Uncategorised thoughts")
            .without("category")
            .build(),
    )
    .await;

    let (_, page) = send(&app, empty_request(Method::GET, "/api/posts")).await;
    let summary = &page["posts"][0];
    assert!(summary.get("content").is_none());
    assert_eq!(summary["category"], "");
    assert!(summary["excerpt"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn drafts_are_hidden_from_public_reads() {
    let app = make_test_router();
    let draft = create(&app, PostBodyBuilder::new("Unfinished draft post").draft().build()).await;
    assert_eq!(draft["published"], false);
    assert_eq!(draft["published_at"], Value::Null);

    let (_, page) = send(&app, empty_request(Method::GET, "/api/posts")).await;
    assert_eq!(page["total_posts"], 0);

    let slug = draft["slug"].as_str().unwrap();
    let (status, _) = send(&app, empty_request(Method::GET, &format!("/api/posts/{slug}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_slug() {
    let app = make_test_router();
    let draft = create(
        &app,
        PostBodyBuilder::new("Focus Order Basics").draft().featured().build(),
    )
    .await;
    let slug = draft["slug"].as_str().unwrap().to_string();

    let replacement = PostBodyBuilder::new("Focus Order in Depth")
        .set("tags", json!(["focus", "keyboard"]))
        .without("category")
        .build();
    let (status, updated) = send(
        &app,
        json_request(Method::PUT, &format!("/api/posts/{slug}"), &replacement),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["slug"], slug.as_str());
    assert_eq!(updated["title"], "Focus Order in Depth");
    assert_eq!(updated["tags"], json!(["focus", "keyboard"]));
    assert_eq!(updated["category"], "");
    assert_eq!(updated["featured"], false);
    assert_eq!(updated["published"], true);
    assert_eq!(updated["published_at"], "2024-02-01T09:30:00Z");
    assert_eq!(updated["excerpt"], draft["excerpt"]);
}

#[tokio::test]
async fn update_unknown_slug_is_not_found() {
    let app = make_test_router();
    let body = PostBodyBuilder::new("Nothing to replace").build();
    let resp = app
        .oneshot(json_request(Method::PUT, "/api/posts/missing", &body))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn delete_removes_post_and_second_delete_is_not_found() {
    let app = make_test_router();
    let post = create(&app, PostBodyBuilder::new("Short lived post").build()).await;
    let uri = format!("/api/posts/{}", post["slug"].as_str().unwrap());

    let resp = app.clone().oneshot(empty_request(Method::DELETE, &uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (status, _) = send(&app, empty_request(Method::GET, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let resp = app.oneshot(empty_request(Method::DELETE, &uri)).await.unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn duplicate_title_conflicts_instead_of_overwriting() {
    let app = make_test_router();
    let original = create(&app, PostBodyBuilder::new("Same Title Twice").build()).await;

    let second = PostBodyBuilder::new("Same Title Twice")
        .set("author_name", json!("Someone Else"))
        .build();
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/posts", &second))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;

    let uri = format!("/api/posts/{}", original["slug"].as_str().unwrap());
    let (_, stored) = send(&app, empty_request(Method::GET, &uri)).await;
    assert_eq!(stored["author_name"], "Sarah Johnson");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = make_test_router();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": \"Broken"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let wrong_type = PostBodyBuilder::new("Wrong tag type").set("tags", json!("a,b")).build();
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/posts", &wrong_type))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("{}"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn missing_required_fields_are_listed() {
    let app = make_test_router();
    let body = json!({ "content": support::long_content("orphan"), "tags": [] });
    let (status, json) = send(&app, json_request(Method::POST, "/api/posts", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "missing required fields: title, author_name");
}

#[tokio::test]
async fn field_constraints_are_enforced() {
    let app = make_test_router();
    let cases = [
        PostBodyBuilder::new("Tiny").build(),
        PostBodyBuilder::new("Short content").set("content", json!("<p>too short</p>")).build(),
        PostBodyBuilder::new("Markup only")
            .set("content", json!(format!("<div>{}</div>", "<br/>".repeat(30))))
            .build(),
        PostBodyBuilder::new("Long author").set("author_name", json!("x".repeat(101))).build(),
        PostBodyBuilder::new("Long excerpt").set("excerpt", json!("e".repeat(501))).build(),
        PostBodyBuilder::new("Too many tags").set("tags", json!(vec!["tag"; 200])).build(),
    ];
    for body in cases {
        let (status, json) = send(&app, json_request(Method::POST, "/api/posts", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body} -> {json}");
        assert_eq!(json["error"], "Bad Request");
    }

    let (_, page) = send(&app, empty_request(Method::GET, "/api/posts")).await;
    assert_eq!(page["total_posts"], 0);
}

#[tokio::test]
async fn unknown_api_path_answers_json_not_found() {
    let app = make_test_router();
    let resp = app
        .oneshot(empty_request(Method::GET, "/api/authors"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn store_failures_hide_details() {
    let app = make_failing_router();
    let (status, body) = send(&app, empty_request(Method::GET, "/api/posts")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["message"], "database error");

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/posts",
            &PostBodyBuilder::new("Never stored").build(),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin_with_credentials() {
    let app = make_test_router();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/posts")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn posts_stored_before_length_rules_are_still_served() {
    use blog_core::domain::post::{
        AuthorName, NewPost, PostCategory, PostContent, PostFields, PostSlug, PostTags, PostTitle,
    };
    use blog_core::infrastructure::repositories::InMemoryPostRepository;
    use std::sync::Arc;

    let fields = PostFields {
        title: PostTitle::from_storage("Hi".into()),
        content: PostContent::from_storage("short legacy body".into()),
        author_name: AuthorName::from_storage("Admin".into()),
        tags: PostTags::from_storage("legacy"),
        category: PostCategory::from_storage(None),
        featured: false,
        published: true,
    };
    let legacy = NewPost::new(
        fields,
        PostSlug::from_storage("hi".into()),
        "short legacy body".into(),
        support::fixed_now(),
    );
    let repo = InMemoryPostRepository::with_posts([legacy]).unwrap();
    let app = support::make_router_with_repo(Arc::new(repo));

    let (status, page) = send(&app, empty_request(Method::GET, "/api/posts")).await;
    assert_eq!(status, StatusCode::OK, "{page}");
    assert_eq!(page["total_posts"], 1);

    let (status, post) = send(&app, empty_request(Method::GET, "/api/posts/hi")).await;
    assert_eq!(status, StatusCode::OK, "{post}");
    assert_eq!(post["title"], "Hi");
}

#[tokio::test]
async fn repeated_query_parameters_use_the_first_value() {
    let app = support::make_seeded_router();
    let req = empty_request(Method::GET, "/api/posts?limit=2&limit=50&page=1&page=3");
    let (status, page) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK, "{page}");
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["posts"].as_array().unwrap().len(), 2);

    let (status, page) = send(&app, empty_request(Method::GET, "/api/posts?search=%ZZ&page=x")).await;
    assert_eq!(status, StatusCode::OK, "{page}");
    assert_eq!(page["current_page"], 1);
}
