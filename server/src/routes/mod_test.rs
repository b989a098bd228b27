use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use careaid::{AssistantProfile, Slug};
use tower::ServiceExt;

use super::*;
use crate::directory::{AssistantDirectory, DirectoryError, StaticDirectory};

// =============================================================================
// HELPERS
// =============================================================================

struct UnavailableDirectory;

#[async_trait::async_trait]
impl AssistantDirectory for UnavailableDirectory {
    async fn find(&self, _slug: &Slug) -> Result<Option<AssistantProfile>, DirectoryError> {
        Err(DirectoryError::Io { path: "assistants.yaml".into(), source: std::io::Error::other("connection refused") })
    }
}

fn profile() -> AssistantProfile {
    AssistantProfile {
        slug: Slug::parse("front-desk").unwrap(),
        name: "Front Desk".into(),
        description: "Clinic questions".into(),
        welcome_messages: vec!["Hello!".into(), "We open at **9am**.".into()],
        suggested_questions: vec!["What are your hours?".into()],
    }
}

fn config() -> ServerConfig {
    ServerConfig {
        port: 0,
        public_origin: None,
        assistants_file: None,
        widget_pkg_dir: PathBuf::from("/nonexistent/widget"),
        client_pkg_dir: PathBuf::from("/nonexistent/client"),
        backend_script_url: None,
    }
}

fn router_with(directory: Arc<dyn AssistantDirectory>, public_origin: Option<&str>) -> Router {
    app(AppState::new(directory, public_origin.map(str::to_owned)), &config())
}

fn router() -> Router {
    let directory = StaticDirectory::from_profiles(vec![profile()]).unwrap();
    router_with(Arc::new(directory), None)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).header(header::HOST, "care.example").body(Body::empty()).unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// WIDGET
// =============================================================================

#[tokio::test]
async fn widget_script_is_javascript_with_open_cors() {
    let request = Request::builder()
        .uri("/widget.js")
        .header(header::HOST, "care.example")
        .header(header::ORIGIN, "https://partner.example")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(response.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/javascript"));
    assert!(body_text(response).await.contains("careaid_widget.js"));
}

#[tokio::test]
async fn missing_widget_package_file_is_404() {
    let response = router().oneshot(get("/pkg/careaid_widget.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// PUBLIC SURFACE
// =============================================================================

#[tokio::test]
async fn conversation_page_renders_saved_assistant() {
    let response = router().oneshot(get("/public/care-aid/front-desk")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Front Desk"));
    assert!(html.contains("<strong>9am</strong>"));
    assert!(html.contains("chat__bubble--square-trailing"));
    assert!(html.contains("start_conversation"));
    assert!(html.contains("id=\"careaid-profile\""));
}

#[tokio::test]
async fn conversation_page_loads_configured_backend_first() {
    let directory = StaticDirectory::from_profiles(vec![profile()]).unwrap();
    let state = AppState::new(Arc::new(directory), None)
        .with_backend_script(Some("https://chat.care.example/backend.js".into()));
    let response = app(state, &config()).oneshot(get("/public/care-aid/front-desk")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    let backend = html.find("src=\"https://chat.care.example/backend.js\"").unwrap();
    assert!(backend < html.find("start_conversation").unwrap());
}

#[tokio::test]
async fn unknown_and_malformed_slugs_get_not_found_page() {
    for uri in ["/public/care-aid/missing", "/public/care-aid/bad%20slug"] {
        let response = router().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(body_text(response).await.contains("Assistant not found"));
    }
}

#[tokio::test]
async fn directory_failure_is_500() {
    let response =
        router_with(Arc::new(UnavailableDirectory), None).oneshot(get("/public/care-aid/front-desk")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// SHARE API
// =============================================================================

#[tokio::test]
async fn share_links_use_request_host() {
    let request = Request::builder()
        .uri("/api/assistants/front-desk/share")
        .header(header::HOST, "care.example")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["slug"], "front-desk");
    assert_eq!(body["artifacts"][0]["kind"], "direct");
    assert_eq!(body["artifacts"][0]["text"], "https://care.example/public/care-aid/front-desk");
    assert_eq!(
        body["artifacts"][2]["text"],
        r#"<script src="https://care.example/widget.js" data-chatbot-id="front-desk"></script>"#
    );
}

#[tokio::test]
async fn share_links_prefer_configured_origin() {
    let directory = StaticDirectory::from_profiles(vec![profile()]).unwrap();
    let response = router_with(Arc::new(directory), Some("https://chat.care.example"))
        .oneshot(get("/api/assistants/front-desk/share"))
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["artifacts"][0]["text"], "https://chat.care.example/public/care-aid/front-desk");
}

#[tokio::test]
async fn share_links_errors() {
    let response = router().oneshot(get("/api/assistants/missing/share")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router().oneshot(get("/api/assistants/bad%21slug/share")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("invalid assistant id"));
}

// =============================================================================
// PREVIEW AND EDITOR
// =============================================================================

#[tokio::test]
async fn preview_renders_partial_draft() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/preview")
        .header(header::HOST, "care.example")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Triage","welcome_messages":["","  ","Hi!"]}"#))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Triage"));
    assert!(html.contains("Hi!"));
    assert_eq!(html.matches("chat__bubble ").count(), 1);
    assert!(html.contains(careaid::draft::DEFAULT_DESCRIPTION));
}

#[tokio::test]
async fn editor_shell_embeds_requested_profile() {
    let response = router().oneshot(get("/app/editor?slug=front-desk")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("careaid-draft"));
    assert!(html.contains("\"front-desk\""));

    let response = router().oneshot(get("/app/editor")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("careaid-draft"));

    let response = router().oneshot(get("/app/editor?slug=missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = router().oneshot(get("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// ORIGIN
// =============================================================================

#[test]
fn request_origin_rules() {
    let mut headers = HeaderMap::new();
    assert!(matches!(request_origin(None, &headers), Err(ApiError::MissingHost)));
    assert_eq!(request_origin(Some("https://fixed.example"), &headers).unwrap(), "https://fixed.example");

    headers.insert(header::HOST, "care.example:8080".parse().unwrap());
    assert_eq!(request_origin(None, &headers).unwrap(), "http://care.example:8080");

    headers.insert("x-forwarded-proto", "https, http".parse().unwrap());
    assert_eq!(request_origin(None, &headers).unwrap(), "https://care.example:8080");

    headers.insert("x-forwarded-proto", "gopher".parse().unwrap());
    assert_eq!(request_origin(None, &headers).unwrap(), "http://care.example:8080");
}
