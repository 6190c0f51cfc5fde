// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// Every internal failure collapses to HTTP 500 with a `{"detail": ...}`
/// body embedding the underlying error text. "Product not found" is not
/// an error at this level (the lookup handler returns a null body).
#[derive(Debug)]
pub enum AppError {
    Database(sqlx::Error),
    Purchase(sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match self {
            AppError::Database(e) => format!("Database error: {}", e),
            AppError::Purchase(e) => format!("Purchase failed: {}", e),
        };

        let body = Json(json!({
            "detail": detail,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
