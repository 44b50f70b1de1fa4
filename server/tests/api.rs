//! HTTP API Tests
//!
//! Drives the router in-process against a temporary data directory.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;
use wishlist_core::{Reservations, Wish};
use wishlist_server_lib::{build_router, config::Config, state::AppState};

struct TestServer {
    dir: TempDir,
    app: Router,
}

impl TestServer {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("index.html"), "<html>wishlist</html>").unwrap();
        let config = Config {
            port: 0,
            data_dir: dir.path().to_path_buf(),
            wishes_file: "wishes.private.json".to_string(),
            reservations_file: "reservations.json".to_string(),
            static_dir: dir.path().to_path_buf(),
        };
        let app = build_router(AppState::new(&config), &config.static_dir);
        Self { dir, app }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.unwrap_or_default().to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn create(&self, body: &str) -> Wish {
        let (status, text) = self.send(Method::POST, "/api/admin/wishes/", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "{text}");
        serde_json::from_str(&text).unwrap()
    }

    async fn list(&self) -> Vec<Wish> {
        let (status, text) = self.send(Method::GET, "/api/wishes", None).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&text).unwrap()
    }
}

const KITE: &str = r#"{"owner":" Lena ","title":" Drachen ","url":"https://shop.example/kite"}"#;

#[tokio::test]
async fn test_list_without_file_is_empty_array() {
    let server = TestServer::new();
    let (status, text) = server.send(Method::GET, "/api/wishes/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "[]");
}

#[tokio::test]
async fn test_create_sanitizes_and_assigns_id() {
    let server = TestServer::new();

    let created = server.create(KITE).await;

    assert!(created.id.starts_with("lena-drachen-"));
    assert_eq!(created.owner, "lena");
    assert_eq!(created.title, "Drachen");
    assert_eq!(server.list().await, vec![created]);
}

#[tokio::test]
async fn test_create_keeps_supplied_id() {
    let server = TestServer::new();
    let created = server
        .create(r#"{"id":"fixed","owner":"zoe","title":"Ball","url":"u"}"#)
        .await;
    assert_eq!(created.id, "fixed");
}

#[tokio::test]
async fn test_create_validation_messages() {
    let server = TestServer::new();

    let (status, text) = server
        .send(Method::POST, "/api/admin/wishes", Some(r#"{"owner":"lea","url":"u"}"#))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "title is required");

    let (_, text) = server
        .send(Method::POST, "/api/admin/wishes", Some(r#"{"owner":"lea","title":"t"}"#))
        .await;
    assert_eq!(text, "url is required");

    let (_, text) = server
        .send(Method::POST, "/api/admin/wishes", Some(r#"{"title":"t","url":"u"}"#))
        .await;
    assert_eq!(text, "owner is required");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let server = TestServer::new();
    let (status, text) = server
        .send(Method::POST, "/api/admin/wishes/", Some("{oops"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "invalid JSON payload");

    let (status, text) = server
        .send(Method::POST, "/api/reservation", Some("[1,2]"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "invalid JSON payload");
}

#[tokio::test]
async fn test_update_takes_id_from_path() {
    let server = TestServer::new();
    let created = server.create(KITE).await;
    let uri = format!("/api/admin/wishes/{}", created.id);

    let (status, text) = server
        .send(
            Method::PUT,
            &uri,
            Some(r#"{"id":"other","owner":"LENA","title":"Lenkdrachen","url":"u","price":" 15 € "}"#),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{text}");
    let updated: Wish = serde_json::from_str(&text).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, "15 €");
    assert_eq!(server.list().await, vec![updated]);
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let server = TestServer::new();
    let (status, text) = server
        .send(
            Method::PUT,
            "/api/admin/wishes/ghost",
            Some(r#"{"owner":"lea","title":"t","url":"u"}"#),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "wish not found");
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let server = TestServer::new();
    let created = server.create(KITE).await;
    let uri = format!("/api/admin/wishes/{}", created.id);

    let (status, _) = server.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(server.list().await.is_empty());

    let (status, text) = server.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "wish not found");
}

#[tokio::test]
async fn test_missing_id_is_bad_request() {
    let server = TestServer::new();
    let (status, text) = server.send(Method::DELETE, "/api/admin/wishes/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "invalid wish id");
}

#[tokio::test]
async fn test_encoded_slash_in_id_is_bad_request() {
    let server = TestServer::new();
    server
        .create(r#"{"id":"a/b","owner":"lea","title":"t","url":"u"}"#)
        .await;

    let (status, text) = server
        .send(
            Method::PUT,
            "/api/admin/wishes/a%2Fb",
            Some(r#"{"owner":"lea","title":"neu","url":"u"}"#),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "invalid wish id");

    let (status, text) = server.send(Method::DELETE, "/api/admin/wishes/a%2Fb", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "invalid wish id");

    assert_eq!(server.list().await[0].title, "t");
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let server = TestServer::new();
    let (status, _) = server.send(Method::POST, "/api/wishes", Some(KITE)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = server.send(Method::DELETE, "/api/reservation", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_reservation_post_replaces_map() {
    let server = TestServer::new();

    let (status, text) = server
        .send(Method::POST, "/api/reservation", Some(r#"{"a":"Oma","b":true}"#))
        .await;
    assert_eq!(status, StatusCode::OK);
    let echoed: Reservations = serde_json::from_str(&text).unwrap();
    assert_eq!(echoed.len(), 2);

    server
        .send(Method::POST, "/api/reservation", Some(r#"{"c":"Opa"}"#))
        .await;

    let (status, text) = server.send(Method::GET, "/api/reservation", None).await;
    assert_eq!(status, StatusCode::OK);
    let stored: Reservations = serde_json::from_str(&text).unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored.is_reserved("c"));
    assert!(!stored.is_reserved("a"));

    let on_disk = std::fs::read_to_string(server.dir.path().join("reservations.json")).unwrap();
    assert_eq!(on_disk, "{\n  \"c\": \"Opa\"\n}");
}

#[tokio::test]
async fn test_unknown_paths_serve_index() {
    let server = TestServer::new();
    let (status, text) = server.send(Method::GET, "/admin", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "<html>wishlist</html>");
}
