//! Core data model for a VAT check.
//!
//! Everything here lives for the duration of one check: the raw query, the
//! parsed result, and the SOAP transcript threaded from the client to the
//! report renderer. Nothing is shared across requests.

mod countries;
mod error;
mod types;

pub use countries::is_vies_member_code;
pub use error::CheckError;
pub use types::{Report, SoapTranscript, VatCheckResult, VatQuery};
