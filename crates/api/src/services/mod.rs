//! Application services sitting between handlers and storage.

pub mod product;
