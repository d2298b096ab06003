//! Domain types shared by the catalog storage and HTTP layers.

pub mod error;
pub mod product;
pub mod types;
