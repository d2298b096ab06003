//! Product entity model and DTOs.

use catalog_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
}

/// DTO for creating or fully replacing a product.
///
/// Carries no identity; an `id` in the request body is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(
        length(min = 1, max = 100, message = "Product name must be between 1 and 100 characters"),
        custom(function = "catalog_core::product::validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 500, message = "Product description must be less than 500 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "catalog_core::product::validate_price"))]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Product stock cannot be negative"))]
    pub stock: i32,
}

impl ProductInput {
    /// Materialize the row this input would become under `id`.
    pub fn into_product(self, id: DbId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}
