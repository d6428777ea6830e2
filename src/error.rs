use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("blocking pool error: {0}")]
    Blocking(#[from] BlockingError),
    /// Raised by `MemoryProductStore` where Postgres would reject the row itself.
    #[error("constraint violated: {0}")]
    Constraint(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Startup only; logged by `server::migrate`, never returned from a handler.
    #[error("migration failed: {0}")]
    Migration(String),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            CatalogError::NotFound(_) => HttpResponse::NotFound().finish(),
            fault => {
                tracing::error!(error = %fault, "request failed");
                HttpResponse::InternalServerError()
                    .json(json!({"message": "internal server error"}))
            }
        }
    }
}
