// apps/catalog_api/src/lib.rs

//! HTTP API over the `products` table: filtered listing, lookup, create and delete.
//!
//! The binary in `main.rs` wires these modules into an actix-web server; the
//! library target exists so integration tests can mount the same routes.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;

pub use crate::config::{AppConfig, LogFormat};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
pub use crate::web::configure_app_routes;
