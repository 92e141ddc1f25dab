//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// SQLSTATE code PostgreSQL reports for foreign key violations.
const FK_VIOLATION: &str = "23503";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {0}")]
    Invalid(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(e) => match e {
                sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "not_found"),
                sqlx::Error::Database(db) if db.code().as_deref() == Some(FK_VIOLATION) => {
                    (StatusCode::CONFLICT, "foreign_key_violation")
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            },
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
