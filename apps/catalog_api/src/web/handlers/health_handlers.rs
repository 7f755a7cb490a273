// apps/catalog_api/src/web/handlers/health_handlers.rs

use actix_web::HttpResponse;

/// Liveness only; the database is not consulted.
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
