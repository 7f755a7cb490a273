// apps/catalog_api/src/main.rs

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use catalog_api::{configure_app_routes, db, AppConfig, AppState, LogFormat};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // INFO by default, RUST_LOG overrides
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let subscriber = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => subscriber.init(),
    LogFormat::Json => subscriber.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!("Starting product catalog server...");

  // One pool for the whole process, closed after the server stops.
  let db_pool = db::connect_pool(&app_config)
    .await
    .context("Failed to connect to the database")?;
  tracing::info!(
    max_connections = app_config.db_max_connections,
    "Successfully connected to the database."
  );

  let app_state = AppState::new(db_pool.clone(), app_config.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(Cors::permissive())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")?;

  tracing::info!("Server stopped; closing database pool.");
  db_pool.close().await;
  Ok(())
}
