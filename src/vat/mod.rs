//! VAT input handling: normalization, country code validation, and
//! per-country format pre-checks.
//!
//! VIES is the authority on whether a number is valid; this module only
//! cleans up what the caller typed and rejects input that could never be
//! a VIES query (unknown country codes, empty numbers).
//!
//! # Example
//!
//! ```rust
//! use viescheck::vat::*;
//!
//! assert_eq!(normalize_vat_number("pl 123-456-78-90"), "PL1234567890");
//! assert_eq!(validate_country_code("pl").unwrap(), "PL");
//! assert!(vat_number_format_ok("PL", "1234567890"));
//! ```

mod normalize;

pub use normalize::{
    CountryCodeError, normalize_vat_number, validate_country_code, vat_number_format_ok,
};
