// apps/catalog_api/src/db/mod.rs

//! Pool lifecycle and the product repository.

pub mod products;

use crate::config::AppConfig;
use catalog_query::SqlValue;
use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlPoolOptions};
use sqlx::Arguments;

/// Opens the process-wide pool. Fails fast if the first connection can't be made.
pub async fn connect_pool(config: &AppConfig) -> Result<MySqlPool, sqlx::Error> {
  MySqlPoolOptions::new()
    .max_connections(config.db_max_connections)
    .acquire_timeout(config.db_acquire_timeout)
    .connect(&config.database_url)
    .await
}

/// Binds statement parameters in order.
pub(crate) fn to_arguments(params: Vec<SqlValue>) -> Result<MySqlArguments, sqlx::Error> {
  let mut args = MySqlArguments::default();
  for param in params {
    let added = match param {
      SqlValue::Int(v) => args.add(v),
      SqlValue::Text(v) => args.add(v),
      SqlValue::Bool(v) => args.add(v),
      SqlValue::Decimal(v) => args.add(v),
      SqlValue::Null => args.add(Option::<String>::None),
    };
    added.map_err(sqlx::Error::Encode)?;
  }
  Ok(args)
}
