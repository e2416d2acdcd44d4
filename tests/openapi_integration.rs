// tests/openapi_integration.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use api_base::presentation::http::openapi::{ApiLogo, docs_router, write_openapi_snapshot};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

#[tokio::test]
async fn swagger_ui_serves_bundled_document() {
    let app = docs_router(None);

    let resp = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/v1/activities"]["post"].is_object());
}

#[tokio::test]
async fn redoc_page_is_html() {
    let app = docs_router(None);

    let resp = get(&app, "/redoc").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn root_redirects_to_docs() {
    let app = docs_router(None);

    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/docs");
}

#[tokio::test]
async fn branded_document_reaches_both_uis() {
    let logo = ApiLogo {
        url: "https://cdn.example.com/logo.gif".into(),
        alt_text: "Example".into(),
    };
    let app = docs_router(Some(&logo));

    let resp = get(&app, "/redoc").await;
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("x-logo"));
    assert!(page.contains("https://cdn.example.com/logo.gif"));

    let resp = get(&app, "/api-docs/openapi.json").await;
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(doc["info"]["x-logo"]["altText"], "Example");
}

#[tokio::test]
async fn unbranded_redoc_has_no_logo() {
    let resp = get(&docs_router(None), "/redoc").await;
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!page.contains("x-logo"));
}

#[test]
fn snapshot_is_written_with_logo() {
    let dir = std::env::temp_dir().join(format!("api_base_openapi_{}", std::process::id()));
    let path = dir.join("nested").join("openapi.json");
    let logo = ApiLogo {
        url: "https://cdn.example.com/logo.gif".into(),
        alt_text: "Example".into(),
    };

    write_openapi_snapshot(&path, Some(&logo)).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["info"]["title"], "API Base");
    assert_eq!(doc["info"]["x-logo"]["altText"], "Example");
    std::fs::remove_dir_all(&dir).unwrap();
}
