//! HTTP service wiring: configuration, shared state, and the router.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::CheckVatForm;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::vies::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ViesClient};

/// Shared application state. The VIES client is the only shared piece;
/// everything else lives per request.
pub struct AppState {
    pub client: ViesClient,
}

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub vies_endpoint: String,
    pub vies_timeout: Duration,
}

impl ServerConfig {
    /// Read `PORT`, `VIES_ENDPOINT`, and `VIES_TIMEOUT_SECS`, falling back
    /// to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let vies_endpoint =
            std::env::var("VIES_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout_secs = std::env::var("VIES_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            port,
            vies_endpoint,
            vies_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    // CORS stays permissive; the PDF response additionally exposes its
    // Content-Disposition header so browser clients can read the filename.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::form_page))
        .route("/health", get(handlers::health))
        .route("/check-vat", post(handlers::check_vat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
