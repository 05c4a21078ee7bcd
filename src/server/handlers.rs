//! HTTP handlers for the VAT check service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use chrono::Local;
use serde::Deserialize;

use crate::core::{VatCheckResult, VatQuery};
use crate::report::build_report;
use crate::server::{AppState, error::ApiError};
use crate::vat::{normalize_vat_number, validate_country_code, vat_number_format_ok};
use crate::vies::parse_check_vat_response;

/// Form body of `POST /check-vat`.
#[derive(Debug, Deserialize)]
pub struct CheckVatForm {
    pub country_code: String,
    pub vat_number: String,
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Serve the check form.
pub async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Run one VAT check: normalize, query VIES, parse, and answer with
/// either a PDF report (valid number) or a JSON message (anything else).
pub async fn check_vat(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CheckVatForm>,
) -> Result<Response, ApiError> {
    let country_code = match validate_country_code(&form.country_code) {
        Ok(cc) => cc,
        Err(e) => {
            tracing::info!("rejected input: {e}");
            return Ok(message_response(
                VatCheckResult::unverifiable(&e.to_string()).status_message,
            ));
        }
    };

    let vat_number = normalize_vat_number(&form.vat_number);
    if vat_number.is_empty() {
        return Ok(message_response(
            VatCheckResult::unverifiable("VAT number contains no letters or digits")
                .status_message,
        ));
    }
    if !vat_number_format_ok(&country_code, &vat_number) {
        tracing::debug!(
            %country_code,
            %vat_number,
            "number does not match the national format, querying VIES anyway"
        );
    }

    let transcript = match state.client.check_vat(&country_code, &vat_number).await {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!("VIES request failed: {e}");
            return Ok(message_response(
                VatCheckResult::unverifiable(&e.to_string()).status_message,
            ));
        }
    };

    let result = parse_check_vat_response(&transcript.response_xml);
    if !result.valid {
        tracing::info!(%country_code, %vat_number, "VAT number not confirmed");
        return Ok(message_response(result.status_message));
    }

    let query = VatQuery {
        country_code,
        vat_number,
    };
    let report = build_report(&query, &result, &transcript, Local::now().naive_local())?;
    tracing::info!(
        country_code = %query.country_code,
        vat_number = %query.vat_number,
        filename = %report.filename,
        "VAT number active, report generated"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report.filename),
            ),
            (
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                "Content-Disposition".to_string(),
            ),
        ],
        report.bytes,
    )
        .into_response())
}

/// 200 JSON reply for every "not valid / could not verify" outcome.
fn message_response(message: String) -> Response {
    Json(serde_json::json!({ "message": message })).into_response()
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>VIES VAT Number Check</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css" rel="stylesheet">
</head>
<body class="bg-gray-100">
    <div class="container mx-auto px-4 py-8">
        <div class="max-w-md mx-auto bg-white rounded-lg shadow-md p-6">
            <h1 class="text-2xl font-bold mb-6 text-center">VIES VAT Number Check</h1>
            <form action="/check-vat" method="post" class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700">Country code:</label>
                    <input type="text" name="country_code"
                           class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
                           required maxlength="2" placeholder="e.g. PL">
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">VAT number:</label>
                    <input type="text" name="vat_number"
                           class="mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500"
                           required placeholder="without country prefix">
                </div>
                <button type="submit"
                        class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500">
                    Check
                </button>
            </form>
        </div>
    </div>
</body>
</html>
"#;
