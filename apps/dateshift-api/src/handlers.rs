//! HTTP handlers for DateShift API

use axum::Json;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{Datelike, Utc};

use dateshift_engine::ShiftSession;

use crate::error::ApiError;
use crate::models::*;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

fn open_session(zip_base64: &str, default_year: Option<i32>) -> Result<ShiftSession, ApiError> {
    let zip_bytes = BASE64
        .decode(zip_base64)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid ZIP base64: {}", e)))?;
    let default_year = default_year.unwrap_or_else(|| Utc::now().year());
    Ok(ShiftSession::open_with_default_year(
        &zip_bytes,
        default_year,
    )?)
}

/// Scan an archive and report detected date ranges per document
pub async fn detect(Json(req): Json<DetectRequest>) -> Result<Json<DetectResponse>, ApiError> {
    let mut session = open_session(&req.zip_base64, req.default_year)?;
    if let Some(policy) = &req.policy {
        session.plan(policy);
    }

    let documents = session.records();
    tracing::info!(
        documents = documents.len(),
        ranges = documents.iter().map(|d| d.ranges.len()).sum::<usize>(),
        "detection complete"
    );
    Ok(Json(DetectResponse { documents }))
}

/// Rewrite an archive under a policy and return the result
pub async fn process(Json(req): Json<ProcessRequest>) -> Result<Json<ProcessResponse>, ApiError> {
    let mut session = open_session(&req.zip_base64, req.default_year)?;
    session.plan(&req.policy);
    for item in &req.overrides {
        session.set_replacement(&item.original_text, &item.replacement);
    }

    let changes = session
        .changes()
        .into_iter()
        .map(|(original_text, replacement)| ChangeEntry {
            original_text,
            replacement,
        })
        .collect();

    let output = session.process()?;
    tracing::info!(outcomes = output.outcomes.len(), "processing complete");

    Ok(Json(ProcessResponse {
        zip_base64: BASE64.encode(&output.zip_bytes),
        outcomes: output.outcomes,
        changes,
    }))
}

/// Download the built-in sample archive
pub async fn sample() -> Result<Json<SampleResponse>, ApiError> {
    let zip_bytes = shared_docx::sample::build_sample_archive()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
    Ok(Json(SampleResponse {
        zip_base64: BASE64.encode(&zip_bytes),
        file_name: "sample-documents.zip".to_string(),
    }))
}
