//! VIES SOAP integration: envelope generation, transport, and response
//! parsing.
//!
//! The checkVat operation is a single synchronous round-trip; the client
//! returns the raw exchange as a [`SoapTranscript`](crate::core::SoapTranscript)
//! so callers can render or log exactly what went over the wire.

mod envelope;
mod parse;

#[cfg(feature = "client")]
mod client;

pub use envelope::build_check_vat_envelope;
pub use parse::parse_check_vat_response;

#[cfg(feature = "client")]
pub use client::{DEFAULT_TIMEOUT_SECS, ViesClient, ViesError};

/// Production checkVat endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://ec.europa.eu/taxation_customs/vies/services/checkVatService";

/// SOAP namespace URIs used by the checkVat service.
pub mod soap_ns {
    pub const ENVELOPE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
    pub const CHECK_VAT_TYPES: &str = "urn:ec.europa.eu:taxud:vies:services:checkVat:types";
}
