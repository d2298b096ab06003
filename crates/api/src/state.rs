use crate::services::product::ProductService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool and the service are both handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used by `/health`.
    pub pool: catalog_db::DbPool,
    /// Product operations over the configured store.
    pub products: ProductService,
}
