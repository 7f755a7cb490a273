// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use catalog_api::{AppConfig, AppState};
use once_cell::sync::Lazy;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

/// Nothing listens on port 1, so any query against this pool fails.
pub const UNREACHABLE_DATABASE_URL: &str = "mysql://root@127.0.0.1:1/plivanje";

pub fn test_config(database_url: &str) -> AppConfig {
  let database_url = database_url.to_string();
  AppConfig::from_lookup(move |name| match name {
    "DATABASE_URL" => Some(database_url.clone()),
    "DB_ACQUIRE_TIMEOUT_SECS" => Some("1".to_string()),
    _ => None,
  })
  .expect("test config is valid")
}

/// State whose pool never connects. Must be called inside a runtime.
pub fn unreachable_state() -> AppState {
  let pool = MySqlPoolOptions::new()
    .max_connections(1)
    .acquire_timeout(Duration::from_millis(500))
    .connect_lazy(UNREACHABLE_DATABASE_URL)
    .expect("database url parses");
  AppState::new(pool, Arc::new(test_config(UNREACHABLE_DATABASE_URL)))
}

/// Builds a test service with the production routes mounted.
#[allow(unused_macros)]
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(catalog_api::configure_app_routes),
    )
    .await
  };
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
