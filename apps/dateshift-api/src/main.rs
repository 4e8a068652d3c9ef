//! DateShift API Server - Backend for DOCX date-range rewriting
//!
//! Provides REST endpoints for:
//! - Date-range detection in uploaded ZIP archives
//! - Policy-driven rewriting with a downloadable result archive
//! - Sample document delivery

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use dateshift_api::router;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dateshift_api=info".parse()?)
                .add_directive("dateshift_engine=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with middleware
    let app = router().layer(TraceLayer::new_for_http()).layer(cors);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting DateShift API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
