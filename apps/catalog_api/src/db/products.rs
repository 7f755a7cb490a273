// apps/catalog_api/src/db/products.rs

use catalog_query::{NewProduct, ProductFilter, ProductId, SqlValue, Statement};
use sqlx::MySqlPool;
use tracing::{debug, instrument};

use super::to_arguments;
use crate::models::Product;

fn format_params(params: &[SqlValue]) -> String {
  let rendered: Vec<String> = params.iter().map(ToString::to_string).collect();
  format!("[{}]", rendered.join(", "))
}

#[instrument(name = "db::list_products", skip(pool, filter), err)]
pub async fn list_products(pool: &MySqlPool, filter: &ProductFilter) -> Result<Vec<Product>, sqlx::Error> {
  let statement = Statement::select_products(filter);
  debug!(sql = statement.sql(), params = %format_params(statement.params()), "Executing product query");

  let (sql, params) = statement.into_parts();
  sqlx::query_as_with::<_, Product, _>(&sql, to_arguments(params)?)
    .fetch_all(pool)
    .await
}

#[instrument(name = "db::find_product", skip(pool), fields(product_id = %id), err)]
pub async fn find_product(pool: &MySqlPool, id: ProductId) -> Result<Option<Product>, sqlx::Error> {
  let (sql, params) = Statement::find_product(id).into_parts();
  sqlx::query_as_with::<_, Product, _>(&sql, to_arguments(params)?)
    .fetch_optional(pool)
    .await
}

/// Returns the id the store assigned to the new row.
#[instrument(name = "db::insert_product", skip(pool, product), fields(name = %product.name), err)]
pub async fn insert_product(pool: &MySqlPool, product: &NewProduct) -> Result<u64, sqlx::Error> {
  let (sql, params) = Statement::insert_product(product).into_parts();
  let result = sqlx::query_with(&sql, to_arguments(params)?).execute(pool).await?;
  Ok(result.last_insert_id())
}

/// Returns `false` when no row had that id.
#[instrument(name = "db::delete_product", skip(pool), fields(product_id = %id), err)]
pub async fn delete_product(pool: &MySqlPool, id: ProductId) -> Result<bool, sqlx::Error> {
  let (sql, params) = Statement::delete_product(id).into_parts();
  let result = sqlx::query_with(&sql, to_arguments(params)?).execute(pool).await?;
  Ok(result.rows_affected() > 0)
}
