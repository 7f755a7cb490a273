// apps/catalog_api/src/models/product.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A `products` row joined with its category name. Field order matches
/// `catalog_query::PRODUCT_COLUMNS`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub category_id: i64,
  pub size: Option<String>,
  pub gender: Option<String>,
  pub color: Option<String>,
  pub brand: Option<String>,
  pub availability: bool,
  pub image_url: Option<String>,
  pub category_name: Option<String>, // NULL for orphaned category references
}
