//! roost-api - HTTP API server for the roost listing service.
//!
//! The binary in `main.rs` wires configuration, logging, and the store;
//! this library holds the router, shared state, and handlers so
//! integration tests can assemble the same application in-process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod upload;

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use roost_catalog::{ContactIntake, PropertyCatalog};
use upload::UploadGateway;

use handlers::{
    admin::verify_admin,
    contacts::{list_contacts, submit_contact},
    properties::{create_property, delete_property, list_properties, update_property},
    uploads::upload_images,
};

/// Request bodies above this are rejected; covers multi-image uploads.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PropertyCatalog>,
    pub intake: Arc<ContactIntake>,
    pub uploads: Arc<UploadGateway>,
    /// Admin gate secret. `None` means the gate always rejects.
    pub admin_code: Option<String>,
}

/// Parse allowed origins from the comma-separated `ALLOWED_ORIGINS`
/// environment variable. Defaults to the local dev servers the frontend
/// runs on.
fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Build the application router over the given state. Uploaded images
/// are served statically from `upload_dir` under `/uploads`.
pub fn router(state: AppState, upload_dir: &Path) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route(
            "/api/properties",
            get(list_properties).post(create_property),
        )
        .route(
            "/api/properties/:id",
            put(update_property).delete(delete_property),
        )
        .route("/api/contact", post(submit_contact))
        .route("/api/contacts", get(list_contacts))
        .route("/api/upload-images", post(upload_images))
        .route("/api/verify-admin", post(verify_admin))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parse_allowed_origins()))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    "roost backend is up and running"
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Catch-all for undefined routes.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
