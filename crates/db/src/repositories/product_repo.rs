//! Repository for the `products` table.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{Product, ProductInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, stock";

/// Storage abstraction the product service is written against.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error>;

    /// Insert a new row when `id` is `None`, otherwise replace every mutable
    /// field of the row with that identity. Returns the stored row.
    ///
    /// Replacing never inserts: if the row is gone (a delete won the race
    /// after the caller's existence check) this fails with
    /// [`sqlx::Error::RowNotFound`] instead of bringing the id back.
    async fn save(&self, id: Option<DbId>, input: &ProductInput) -> Result<Product, sqlx::Error>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, sqlx::Error>;
}

/// PostgreSQL-backed [`ProductStore`].
#[derive(Clone)]
pub struct ProductRepo {
    pool: PgPool,
}

impl ProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepo {
    /// List all products ordered by id.
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, id: Option<DbId>, input: &ProductInput) -> Result<Product, sqlx::Error> {
        let query = match id {
            None => format!(
                "INSERT INTO products (name, description, price, stock)
                 VALUES ($1, $2, $3, $4)
                 RETURNING {COLUMNS}"
            ),
            Some(_) => format!(
                "UPDATE products
                 SET name = $1, description = $2, price = $3, stock = $4
                 WHERE id = $5
                 RETURNING {COLUMNS}"
            ),
        };
        let mut q = sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock);
        if let Some(id) = id {
            q = q.bind(id);
        }
        // Zero rows from the UPDATE surfaces as RowNotFound.
        q.fetch_one(&self.pool).await
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Plain substring match via `strpos`, so `%` and `_` in the fragment are
    /// literal. An empty fragment matches every row.
    async fn find_by_name_containing_ignore_case(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE strpos(lower(name), lower($1)) > 0
             ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(fragment)
            .fetch_all(&self.pool)
            .await
    }
}

/// In-memory [`ProductStore`] for service and HTTP tests that run without
/// a database.
pub mod mock {
    use std::collections::BTreeMap;

    use tokio::sync::RwLock;

    use super::*;

    #[derive(Default)]
    struct Table {
        last_id: DbId,
        rows: BTreeMap<DbId, Product>,
    }

    #[derive(Default)]
    pub struct MemoryProductStore {
        table: RwLock<Table>,
    }

    impl MemoryProductStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored rows.
        pub async fn row_count(&self) -> usize {
            self.table.read().await.rows.len()
        }
    }

    #[async_trait]
    impl ProductStore for MemoryProductStore {
        async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
            Ok(self.table.read().await.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
            Ok(self.table.read().await.rows.get(&id).cloned())
        }

        async fn save(&self, id: Option<DbId>, input: &ProductInput) -> Result<Product, sqlx::Error> {
            let mut table = self.table.write().await;
            let id = match id {
                Some(id) if table.rows.contains_key(&id) => id,
                Some(_) => return Err(sqlx::Error::RowNotFound),
                None => {
                    table.last_id += 1;
                    table.last_id
                }
            };
            let product = input.clone().into_product(id);
            table.rows.insert(id, product.clone());
            Ok(product)
        }

        async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
            Ok(self.table.read().await.rows.contains_key(&id))
        }

        async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
            Ok(self.table.write().await.rows.remove(&id).is_some())
        }

        async fn find_by_name_containing_ignore_case(
            &self,
            fragment: &str,
        ) -> Result<Vec<Product>, sqlx::Error> {
            let needle = fragment.to_lowercase();
            Ok(self
                .table
                .read()
                .await
                .rows
                .values()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }
    }
}
