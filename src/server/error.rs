//! Error type for the HTTP handlers.
//!
//! Transport and parse failures never land here — they are ordinary
//! "could not verify" outcomes answered with 200 JSON. Only an internal
//! fault while rendering an already-valid result becomes a 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::core::CheckError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("report rendering failed: {0}")]
    Render(#[from] CheckError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Render(e) => {
                tracing::error!("report rendering failed: {e}");
                let body = Json(json!({
                    "message": "Failed to generate PDF report",
                    "error": e.to_string(),
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
