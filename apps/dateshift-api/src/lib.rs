//! DateShift API: router construction and wire models.

pub mod error;
pub mod handlers;
pub mod models;

use axum::routing::{get, post};
use axum::Router;

/// Build the application router. Middleware layers (tracing, CORS) are
/// added by the binary.
pub fn router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Detection and processing
        .route("/api/detect", post(handlers::detect))
        .route("/api/process", post(handlers::process))
        // Sample archive download
        .route("/api/sample", get(handlers::sample))
}
