// demos/shop_app/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use trolley::TrolleyError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// The startup fetch failed; carries the feed's reason.
  #[error("Catalog Unavailable: {0}")]
  CatalogUnavailable(String),

  #[error("Cart Error: {source}")]
  Cart {
    #[from] // Allows conversion from trolley::TrolleyError
    source: TrolleyError,
  },
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Cart { source } => match source {
        TrolleyError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        TrolleyError::UnknownProduct { .. } => StatusCode::NOT_FOUND,
        TrolleyError::Rejected { .. } => StatusCode::CONFLICT,
        TrolleyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
      AppError::CatalogUnavailable(_) => StatusCode::BAD_GATEWAY,
      AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let status = self.status_code();
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => HttpResponse::build(status).json(json!({"error": m})),
      AppError::Cart { source } => HttpResponse::build(status).json(json!({"error": source.to_string()})),
      AppError::CatalogUnavailable(reason) => {
        HttpResponse::build(status).json(json!({"error": "Product catalog unavailable", "detail": reason}))
      }
      AppError::Config(m) => HttpResponse::build(status).json(json!({"error": "Configuration issue", "detail": m})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
