// apps/catalog_api/src/models/mod.rs

//! Contains data structures representing database rows.

pub mod product;

pub use product::Product;
