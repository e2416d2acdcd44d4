// tests/support/helpers.rs
use super::time::fixed_now;
use api_base::application::{
    pagination::{KeysetConfig, KeysetPaginator},
    ports::time::Clock,
    services::ApplicationServices,
};
use api_base::domain::activity::ActivityRepository;
use api_base::infrastructure::{repositories::InMemoryActivityRepository, time::FixedClock};
use api_base::presentation::http::{
    openapi::ApiLogo, routes::build_router, state::HttpState,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt as _;
use url::Url;

pub const PUBLIC_BASE_URL: &str = "http://api.test";

pub fn default_keyset_config() -> KeysetConfig {
    KeysetConfig::timestamp()
        .max_limit(Some(100))
        .build()
        .expect("valid keyset config")
}

pub fn make_test_router(repo: Arc<InMemoryActivityRepository>) -> axum::Router {
    make_test_router_with(repo, default_keyset_config(), None)
}

pub fn make_test_router_with(
    repo: Arc<InMemoryActivityRepository>,
    config: KeysetConfig,
    api_logo: Option<ApiLogo>,
) -> axum::Router {
    let repo: Arc<dyn ActivityRepository> = repo;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_now()));
    let paginator = Arc::new(KeysetPaginator::new(config));
    let services = Arc::new(ApplicationServices::new(repo, clock, paginator));

    let state = HttpState {
        services,
        public_base_url: Url::parse(PUBLIC_BASE_URL).expect("base url"),
        api_logo,
    };
    build_router(state)
}

pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).expect("serialize body"))
        }
        None => Body::empty(),
    };
    let req = builder.body(body).expect("request");

    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub async fn get_text(app: &axum::Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .expect("read body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Path and query of an absolute `next` link, ready to be requested again.
pub fn relative(next: &str) -> String {
    let url = Url::parse(next).expect("absolute next link");
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
