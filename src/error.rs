use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::Envelope;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Referential integrity error: {0}")]
    ReferentialIntegrity(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return AppError::ReferentialIntegrity(db_err.message().to_string());
            }
        }
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => tracing::warn!("Validation error: {}", msg),
            AppError::ReferentialIntegrity(msg) => {
                tracing::warn!("Referential integrity error: {}", msg)
            }
            AppError::NotFound(msg) => tracing::warn!("Not found: {}", msg),
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            AppError::Csv(e) => tracing::error!("CSV error: {}", e),
            AppError::Internal(e) => tracing::error!("Internal error: {}", e),
        }

        // Every failure shares one status code; callers only read the envelope.
        let body = Json(Envelope::error(self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
