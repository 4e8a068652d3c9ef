//! Error types for DateShift API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dateshift_engine::ShiftError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not a readable ZIP archive: {0}")]
    InvalidArchive(String),

    #[error("No .docx documents found in the archive")]
    NoDocumentsFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ShiftError> for ApiError {
    fn from(err: ShiftError) -> Self {
        match err {
            ShiftError::InvalidArchive(msg) => ApiError::InvalidArchive(msg),
            ShiftError::NoDocumentsFound => ApiError::NoDocumentsFound,
            other => ApiError::Internal(anyhow::anyhow!(other)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidArchive(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Not a readable ZIP archive: {}", msg),
            ),
            ApiError::NoDocumentsFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "No .docx documents found in the archive".to_string(),
            ),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
