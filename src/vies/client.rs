//! EU VIES SOAP API client for VAT number validation.

use std::fmt;
use std::time::Duration;

use super::envelope::build_check_vat_envelope;
use crate::core::SoapTranscript;

/// Default outbound timeout. VIES publishes no SLA; 10 seconds is the only
/// place a check could otherwise hang indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error from the VIES checkVat call.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ViesError {
    /// Network, TLS, or timeout error before a response arrived.
    Network(String),
    /// The service answered with a non-2xx status.
    ApiError(String),
    /// The request envelope could not be generated.
    Request(String),
}

impl fmt::Display for ViesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "VIES network error: {e}"),
            Self::ApiError(e) => write!(f, "VIES API error: {e}"),
            Self::Request(e) => write!(f, "VIES request error: {e}"),
        }
    }
}

impl std::error::Error for ViesError {}

/// Client for the VIES checkVat SOAP endpoint.
///
/// Holds no per-request state — the transcript of each exchange is
/// returned to the caller, so one client is safely shared across
/// concurrent checks.
#[derive(Debug, Clone)]
pub struct ViesClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ViesClient {
    /// Create a client for `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ViesError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ViesError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client for the production VIES endpoint.
    pub fn with_default_endpoint() -> Result<Self, ViesError> {
        Self::new(
            super::DEFAULT_ENDPOINT,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one checkVat round-trip.
    ///
    /// `country_code` must be a 2-letter VIES member code, `vat_number`
    /// the normalized number without country prefix. A single POST is
    /// issued; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`ViesError::Network`] on connect/TLS/timeout failures,
    /// [`ViesError::ApiError`] on a non-2xx status. Both are ordinary
    /// "could not verify" outcomes for callers, not faults.
    pub async fn check_vat(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<SoapTranscript, ViesError> {
        let request_xml = build_check_vat_envelope(country_code, vat_number)
            .map_err(|e| ViesError::Request(e.to_string()))?;

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml;charset=UTF-8")
            .header("SOAPAction", "")
            .body(request_xml.clone())
            .send()
            .await
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ViesError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ViesError::ApiError(format!("HTTP {status}")));
        }

        Ok(SoapTranscript {
            request_xml,
            response_xml: body,
        })
    }
}
