//! # viescheck
//!
//! EU VAT number validation against the [VIES](https://ec.europa.eu/taxation_customs/vies/)
//! SOAP service, with PDF reports documenting each check.
//!
//! The crate covers the full round-trip: input normalization, SOAP envelope
//! generation, a tolerant parser for the `checkVatResponse` payload
//! (structured XML first, regex fallback for malformed replies), a PDF
//! renderer for the check report including a pretty-printed transcript of
//! the SOAP exchange, and an axum HTTP service tying it all together.
//!
//! ## Quick Start
//!
//! ```rust
//! use viescheck::vat::{normalize_vat_number, validate_country_code};
//!
//! assert_eq!(normalize_vat_number("123-456-78-90"), "1234567890");
//! assert_eq!(validate_country_code(" pl ").unwrap(), "PL");
//! ```
//!
//! Checking a number against VIES (async, requires network):
//!
//! ```ignore
//! use viescheck::vies::{ViesClient, parse_check_vat_response};
//!
//! let client = ViesClient::with_default_endpoint()?;
//! let transcript = client.check_vat("PL", "1234567890").await?;
//! let result = parse_check_vat_response(&transcript.response_xml);
//! assert!(result.valid);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Data model, errors, VAT normalization, country codes |
//! | `soap` | SOAP envelope generation & response parsing |
//! | `client` | Async VIES HTTP client |
//! | `report` | PDF check report rendering |
//! | `server` | axum HTTP service + `viescheck-server` binary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "soap")]
pub mod vies;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "server")]
pub mod server;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
