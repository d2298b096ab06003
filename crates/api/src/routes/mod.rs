pub mod health;
pub mod product;

use axum::http::{StatusCode, Uri};
use axum::response::Response;
use axum::Router;

use crate::error::error_response;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 greeting (GET)
/// /health                           service + database health (GET)
///
/// /products                         list, create
/// /products/search?name=            case-insensitive name search
/// /products/{id}                    get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/products", product::router())
        .fallback(unknown_route)
}

async fn unknown_route(uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("No route for {}", uri.path()),
    )
}
