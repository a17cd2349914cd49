use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use greeter::{create_router, AppState, VersionLabel};
use tower::ServiceExt;

fn app(label: Option<&str>) -> Router {
    create_router(AppState::for_version(VersionLabel::resolve(label)))
}

async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn root_without_label_greets_blue() {
    let (status, headers, body) = call(app(None), Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello from BLUE version!");
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
}

#[tokio::test]
async fn root_with_label_greets_uppercased() {
    let (status, _, body) = call(app(Some("green")), Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello from GREEN version!");
}

#[tokio::test]
async fn root_with_empty_label_greets_blue() {
    let (status, _, body) = call(app(Some("")), Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello from BLUE version!");
}

#[tokio::test]
async fn root_is_idempotent() {
    let app = app(Some("canary"));
    let (_, _, first) = call(app.clone(), Method::GET, "/").await;
    let (_, _, second) = call(app, Method::GET, "/").await;
    assert_eq!(first, "Hello from CANARY version!");
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_reports_ok_for_any_label() {
    for label in [None, Some(""), Some("blue"), Some("green")] {
        let (status, headers, body) = call(app(label), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
    }
}

#[tokio::test]
async fn head_is_served_by_get_route() {
    let (status, _, body) = call(app(None), Method::HEAD, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let (status, _, _) = call(app(None), Method::POST, "/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _, _) = call(app(None), Method::DELETE, "/health").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _, _) = call(app(None), Method::GET, "/version").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
