#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::services::product::ProductService;
use catalog_api::state::AppState;
use catalog_db::repositories::product_repo::mock::MemoryProductStore;
use catalog_db::repositories::{ProductRepo, ProductStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout: Duration::from_secs(30),
        shutdown_timeout: Duration::from_secs(30),
    }
}

fn build_app(pool: PgPool, store: Arc<dyn ProductStore>) -> Router {
    let state = AppState {
        pool,
        products: ProductService::new(store),
    };
    build_app_router(state, &test_config())
}

/// Full application router backed by a real database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool.clone(), Arc::new(ProductRepo::new(pool)))
}

/// Full application router backed by an in-memory store.
///
/// The pool is lazy and never connects; only `/health` would touch it.
pub fn build_memory_app(store: Arc<MemoryProductStore>) -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://catalog@localhost/unused")
        .unwrap();
    build_app(pool, store)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn assert_json_content_type(response: &Response) {
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("error responses carry a content type");
    assert_eq!(content_type, "application/json");
}
