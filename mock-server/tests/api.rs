use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, ApiData, ErrorBody, SearchResponse};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- api data ---

#[tokio::test]
async fn api_data_lists_a_master_ref() {
    let resp = app().oneshot(get("/api/v2")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let data: ApiData = body_json(resp).await;
    assert_eq!(data.refs.len(), 1);
    assert!(data.refs[0].is_master_ref);
    assert!(!data.refs[0].reference.is_empty());
    assert_eq!(data.languages[0].id, "en-us");
}

#[tokio::test]
async fn each_app_gets_a_fresh_master_ref() {
    let a: ApiData = body_json(app().oneshot(get("/api/v2")).await.unwrap()).await;
    let b: ApiData = body_json(app().oneshot(get("/api/v2")).await.unwrap()).await;
    assert_ne!(a.refs[0].reference, b.refs[0].reference);
}

// --- search ---

#[tokio::test]
async fn search_with_master_ref_returns_200() {
    let app = app();
    let data: ApiData = body_json(app.clone().oneshot(get("/api/v2")).await.unwrap()).await;
    let uri = format!("/api/v2/documents/search?ref={}", data.refs[0].reference);

    let resp = app.oneshot(get(&uri)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: SearchResponse = body_json(resp).await;
    assert_eq!(page.page, 1);
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn search_without_ref_returns_400() {
    let resp = app().oneshot(get("/api/v2/documents/search")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.error.contains("ref"));
}

#[tokio::test]
async fn search_with_unknown_ref_returns_404() {
    let resp = app()
        .oneshot(get("/api/v2/documents/search?ref=nope"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.error, "unknown ref");
}

// --- routing ---

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get("/api/v1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_returns_405() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v2")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
