// apps/catalog_api/src/state.rs
use crate::config::AppConfig;
use sqlx::MySqlPool;
use std::sync::Arc;

/// Shared by every worker. `MySqlPool` is itself a cheap handle onto one pool.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: MySqlPool,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(db_pool: MySqlPool, config: Arc<AppConfig>) -> Self {
    Self { db_pool, config }
  }
}
