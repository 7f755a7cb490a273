// apps/catalog_api/src/web/routes.rs

use actix_web::{error, web, HttpRequest};
use tracing::warn;

use crate::errors::AppError;
use crate::web::handlers::{health_handlers, product_handlers};

// Malformed bodies and query strings get the same 400 shape as validation failures.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  warn!(error = %err, "Rejecting malformed JSON body");
  AppError::Validation(format!("Neispravan JSON: {}", err)).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  warn!(error = %err, "Rejecting malformed query string");
  AppError::Validation(format!("Neispravni parametri upita: {}", err)).into()
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_handlers::health_check_handler))
        .service(
          web::scope("/proizvodi")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("/", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler))
            .route("/", web::post().to(product_handlers::create_product_handler))
            .route("/{id}", web::get().to(product_handlers::get_product_handler))
            .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
        ),
    );
}
