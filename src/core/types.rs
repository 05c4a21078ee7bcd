use serde::{Deserialize, Serialize};

/// The raw input of one VAT check, as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatQuery {
    /// 2-letter VIES member state code (e.g. "PL").
    pub country_code: String,
    /// VAT number without the country prefix, already normalized.
    pub vat_number: String,
}

/// Outcome of a VIES VAT number check.
///
/// Immutable once constructed. `name`/`address` hold the registered
/// company data when VIES returned them; the VIES placeholder `"---"`
/// and empty values are filtered to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatCheckResult {
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Registered company name (if available).
    pub name: Option<String>,
    /// Registered address (if available).
    pub address: Option<String>,
    /// Human-readable summary, one fact per line.
    pub status_message: String,
}

impl VatCheckResult {
    /// Result for a response that carried a recognizable `valid` element.
    pub fn determined(valid: bool, name: Option<String>, address: Option<String>) -> Self {
        let mut status_message = if valid {
            "VAT number is active".to_string()
        } else {
            "VAT number is not active".to_string()
        };
        if let Some(name) = &name {
            status_message.push_str(&format!("\nName: {name}"));
        }
        if let Some(address) = &address {
            status_message.push_str(&format!("\nAddress: {address}"));
        }
        Self {
            valid,
            name,
            address,
            status_message,
        }
    }

    /// Result for a response with no validity indicator at all.
    pub fn undetermined() -> Self {
        Self {
            valid: false,
            name: None,
            address: None,
            status_message: "Could not determine VAT number status".to_string(),
        }
    }

    /// Result for a SOAP fault returned by the VIES service.
    pub fn service_fault(fault: &str) -> Self {
        Self {
            valid: false,
            name: None,
            address: None,
            status_message: format!("VIES service error: {fault}"),
        }
    }

    /// Result for a check that never reached the service.
    pub fn unverifiable(cause: &str) -> Self {
        Self {
            valid: false,
            name: None,
            address: None,
            status_message: format!("Could not verify VAT number: {cause}"),
        }
    }
}

/// The raw SOAP exchange of one check.
///
/// Returned by the client alongside the response so the report renderer
/// can reproduce the exact wire traffic. Never stored on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapTranscript {
    pub request_xml: String,
    pub response_xml: String,
}

/// A rendered check report ready to be sent to the caller.
#[derive(Debug, Clone)]
pub struct Report {
    /// Complete PDF document.
    pub bytes: Vec<u8>,
    /// Suggested download filename (`VIES_<CC>_<VAT>_<NAME>.pdf`).
    pub filename: String,
}
