//! Frontend view and host against real HTTP servers on ephemeral ports.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use frontend::AppState;
use frontend::config::Config;
use frontend::source::HttpHelloSource;
use frontend::view::{App, DisplayState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

/// A running server; dropping it shuts the server down.
struct Running {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl Running {
    fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn spawn(router: Router) -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await
            .unwrap();
    });
    Running {
        addr,
        _shutdown: tx,
    }
}

async fn spawn_backend() -> Running {
    spawn(backend::create_app(&backend::config::Config::default())).await
}

/// An origin nothing listens on.
async fn closed_origin() -> String {
    let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = probe.local_addr().unwrap();
    drop(probe);
    format!("http://{addr}")
}

async fn mount_against(origin: &str) -> App {
    let source = HttpHelloSource::new(reqwest::Client::new(), origin);
    App::mount(Arc::new(source))
}

fn frontend_for(origin: &str) -> Router {
    let config = Config {
        backend_url: origin.to_string(),
        ..Config::default()
    };
    frontend::create_app(Arc::new(AppState::from_config(
        &config,
        reqwest::Client::new(),
    )))
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_view_shows_backend_greeting() {
    let backend = spawn_backend().await;
    let mut app = mount_against(&backend.origin()).await;

    let state = app.settled().await;
    assert_eq!(state, DisplayState::connected("Hello from backend!"));

    let html = app.render();
    assert!(html.contains("<p>Hello from backend!</p>"));
    assert!(html.contains("message-box success"));
    assert!(!html.contains("message-box error"));
    assert!(html.contains("Connected to backend"));
}

#[tokio::test]
async fn test_view_shows_custom_message() {
    let stub = spawn(Router::new().route(
        "/api/hello",
        get(|| async { axum::Json(serde_json::json!({ "message": "X" })) }),
    ))
    .await;
    let mut app = mount_against(&stub.origin()).await;

    assert_eq!(app.settled().await, DisplayState::connected("X"));
}

#[tokio::test]
async fn test_view_connection_refused() {
    let mut app = mount_against(&closed_origin().await).await;

    let state = app.settled().await;
    assert_eq!(state, DisplayState::unreachable());

    let html = app.render();
    assert!(html.contains("<p>Backend not reachable</p>"));
    assert!(html.contains("message-box error"));
    assert!(html.contains("Unable to connect to backend"));
}

#[tokio::test]
async fn test_view_error_status() {
    let stub = spawn(Router::new().route(
        "/api/hello",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({ "message": "should not show" })),
            )
        }),
    ))
    .await;
    let mut app = mount_against(&stub.origin()).await;

    assert_eq!(app.settled().await, DisplayState::unreachable());
}

#[tokio::test]
async fn test_view_not_found_route() {
    // The stub has no /api/hello at all.
    let stub = spawn(Router::new().route("/health", get(|| async { "ok" }))).await;
    let mut app = mount_against(&stub.origin()).await;

    assert_eq!(app.settled().await, DisplayState::unreachable());
}

#[tokio::test]
async fn test_view_invalid_body() {
    let stub = spawn(Router::new().route("/api/hello", get(|| async { "not json" }))).await;
    let mut app = mount_against(&stub.origin()).await;

    assert_eq!(app.settled().await, DisplayState::unreachable());
}

#[tokio::test]
async fn test_index_page_renders_greeting() {
    let backend = spawn_backend().await;
    let app = frontend_for(&backend.origin());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let html = body_text(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<p>Hello from backend!</p>"));
    assert!(html.contains("class=\"message-box success\""));
}

#[tokio::test]
async fn test_index_page_when_backend_down() {
    let app = frontend_for(&closed_origin().await);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<p>Backend not reachable</p>"));
    assert!(html.contains("class=\"message-box error\""));
}

#[tokio::test]
async fn test_api_is_proxied_to_backend() {
    let backend = spawn_backend().await;
    let app = frontend_for(&backend.origin());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "Hello from backend!" }));

    let missing = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_proxy_forwards_json_body() {
    let backend = spawn_backend().await;
    let app = frontend_for(&backend.origin());

    // The backend parses JSON bodies on every route, so a malformed one
    // coming through the proxy is rejected upstream.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/hello")
                .header("content-type", "application/json")
                .body(Body::from("{broken"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_proxy_when_backend_down() {
    let app = frontend_for(&closed_origin().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["error"], "upstream unavailable");
}

#[tokio::test]
async fn test_proxy_keeps_backend_headers() {
    let backend = spawn_backend().await;
    let app = frontend_for(&backend.origin());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hello")
                .header("origin", "https://x.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert!(headers.contains_key("vary"));
    assert!(headers.contains_key("content-length"));
    assert!(!headers.contains_key("transfer-encoding"));
}

#[tokio::test]
async fn test_proxy_forwards_get_body() {
    let backend = spawn_backend().await;
    let app = frontend_for(&backend.origin());

    // A GET body still reaches the backend's JSON parsing.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hello")
                .header("content-type", "application/json")
                .body(Body::from("{broken"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
