// apps/catalog_api/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog_query::QueryError;
use serde_json::json;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Neispravan ID proizvoda";
pub const MISSING_FIELDS_MESSAGE: &str = "Naziv, opis, cijena i kategorija su obavezni.";
pub const NOT_FOUND_MESSAGE: &str = "Proizvod nije pronađen";
pub const STORE_ERROR_MESSAGE: &str = "Greška prilikom rada s bazom podataka";
pub const INTERNAL_ERROR_MESSAGE: &str = "Došlo je do interne greške";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Library errors are all caused by client input.
impl From<QueryError> for AppError {
  fn from(err: QueryError) -> Self {
    tracing::debug!(query_error = %err, "Rejecting request input");
    match err {
      QueryError::InvalidId { .. } => AppError::Validation(INVALID_ID_MESSAGE.to_string()),
      QueryError::MissingRequiredFields { .. } => AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Sqlx(_) | AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response; the body stays generic for 5xx.
    tracing::error!(application_error = %self, "Responding with error");
    let body = match self {
      AppError::NotFound(m) => json!({ "message": m }),
      AppError::Validation(m) => json!({ "error": m }),
      AppError::Sqlx(_) => json!({ "error": STORE_ERROR_MESSAGE }),
      AppError::Config(_) | AppError::Internal(_) => json!({ "error": INTERNAL_ERROR_MESSAGE }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
