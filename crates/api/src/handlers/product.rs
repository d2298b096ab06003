//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::product::ENTITY_NAME;
use catalog_core::types::DbId;
use catalog_db::models::product::{Product, ProductInput};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::state::AppState;

/// Query parameters for `GET /products/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: String,
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Product>> {
    let product = state
        .products
        .get_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY_NAME,
            id,
        }))?;
    Ok(Json(product))
}

/// GET /products/search?name=<fragment>
pub async fn search(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.find_by_name_contains(&params.name).await?;
    Ok(Json(products))
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.products.create(&input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id}
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> AppResult<Json<Product>> {
    let product = state.products.update(id, &input).await?;
    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
