//! Request extractors shared by handlers.
//!
//! Every extractor here rejects with [`AppError`], so a malformed path, query
//! string or body renders the same `{"error", "code"}` JSON as any other
//! failure instead of axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use catalog_core::product::into_core_error;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and passed its `Validate` schema.
///
/// Malformed JSON, a wrong content type, or missing/mistyped fields reject
/// with [`AppError::BadRequest`]; constraint failures reject with
/// `CoreError::Validation` carrying every field violation.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<ProductInput>) -> AppResult<Json<Product>> {
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(into_core_error)?;

        Ok(Self(value))
    }
}

/// Typed path segment(s), e.g. `PathParam(id): PathParam<DbId>`.
///
/// A segment that does not parse (`/products/abc`, an id past `i64::MAX`)
/// rejects with [`AppError::BadRequest`].
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string deserialized into `T`; a missing or mistyped parameter
/// rejects with [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
