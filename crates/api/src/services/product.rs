//! Product operations over a [`ProductStore`].
//!
//! Input validation happens at the HTTP boundary (see
//! [`crate::extract::ValidatedJson`]); the service only adds the existence
//! checks in front of update and delete.

use std::sync::Arc;

use catalog_core::error::CoreError;
use catalog_core::product::ENTITY_NAME;
use catalog_core::types::DbId;
use catalog_db::models::product::{Product, ProductInput};
use catalog_db::repositories::ProductStore;
use tracing::instrument;

use crate::error::AppResult;

/// Product service, cheap to clone.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Every stored product, in storage order.
    pub async fn list_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.store.find_all().await?)
    }

    /// `None` when no product has this id.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<Product>> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Products whose name contains `fragment`, ignoring case.
    pub async fn find_by_name_contains(&self, fragment: &str) -> AppResult<Vec<Product>> {
        Ok(self
            .store
            .find_by_name_containing_ignore_case(fragment)
            .await?)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &ProductInput) -> AppResult<Product> {
        let product = self.store.save(None, input).await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// Replace every mutable field of product `id`.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: DbId, input: &ProductInput) -> AppResult<Product> {
        if !self.store.exists_by_id(id).await? {
            return Err(not_found(id).into());
        }
        let product = self.store.save(Some(id), input).await?;
        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(not_found(id).into());
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }
}
