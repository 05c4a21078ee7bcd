//! VAT number normalization and country code validation.

use std::fmt;

use crate::core::is_vies_member_code;

/// Error returned when a country code cannot be used for a VIES query.
#[derive(Debug, Clone)]
pub struct CountryCodeError {
    /// The rejected input value.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl fmt::Display for CountryCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid country code '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for CountryCodeError {}

/// Normalize a VAT number: uppercase, then keep only `A-Z0-9`.
///
/// Total and idempotent; an input with no alphanumeric characters
/// normalizes to the empty string.
pub fn normalize_vat_number(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Validate a country code for a VIES query.
///
/// Accepts exactly two ASCII letters naming a VIES member state and
/// returns them uppercased. Anything else is rejected here, before the
/// value gets anywhere near the outbound XML.
pub fn validate_country_code(code: &str) -> Result<String, CountryCodeError> {
    let trimmed = code.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CountryCodeError {
            value: code.into(),
            reason: "must be exactly two letters".into(),
        });
    }

    let upper = trimmed.to_ascii_uppercase();
    if upper == "GR" {
        return Err(CountryCodeError {
            value: code.into(),
            reason: "Greece is 'EL' in VIES".into(),
        });
    }
    if !is_vies_member_code(&upper) {
        return Err(CountryCodeError {
            value: code.into(),
            reason: "not a VIES member state".into(),
        });
    }
    Ok(upper)
}

/// Pre-check a normalized VAT number against the national format.
///
/// A miss is not an error — VIES has the final word and some member
/// states accept more than the published pattern — so callers use this
/// only to annotate logs. Unknown countries pass.
pub fn vat_number_format_ok(country_code: &str, number: &str) -> bool {
    if !number.is_ascii() {
        return false;
    }
    let digits = |n: &str| n.chars().all(|c| c.is_ascii_digit());
    match country_code {
        "AT" => number.len() == 9 && number.starts_with('U') && digits(&number[1..]),
        "BE" => number.len() == 10 && digits(number),
        "BG" => (number.len() == 9 || number.len() == 10) && digits(number),
        "CY" => {
            number.len() == 9
                && digits(&number[..8])
                && number.as_bytes()[8].is_ascii_alphabetic()
        }
        "CZ" => (8..=10).contains(&number.len()) && digits(number),
        "DE" => number.len() == 9 && digits(number) && number.as_bytes()[0] != b'0',
        "DK" => number.len() == 8 && digits(number),
        "EE" => number.len() == 9 && digits(number),
        "EL" => number.len() == 9 && digits(number),
        "ES" => number.len() == 9 && number.chars().all(|c| c.is_ascii_alphanumeric()),
        "FI" => number.len() == 8 && digits(number),
        "FR" => {
            number.len() == 11
                && number[..2].chars().all(|c| c.is_ascii_alphanumeric())
                && digits(&number[2..])
        }
        "HR" => number.len() == 11 && digits(number),
        "HU" => number.len() == 8 && digits(number),
        "IE" => (number.len() == 8 || number.len() == 9)
            && number.chars().all(|c| c.is_ascii_alphanumeric()),
        "IT" => number.len() == 11 && digits(number),
        "LT" => (number.len() == 9 || number.len() == 12) && digits(number),
        "LU" => number.len() == 8 && digits(number),
        "LV" => number.len() == 11 && digits(number),
        "MT" => number.len() == 8 && digits(number),
        "NL" => {
            number.len() == 12
                && digits(&number[..9])
                && number.as_bytes()[9] == b'B'
                && digits(&number[10..])
        }
        "PL" => number.len() == 10 && digits(number),
        "PT" => number.len() == 9 && digits(number),
        "RO" => (2..=10).contains(&number.len()) && digits(number),
        "SE" => number.len() == 12 && digits(number),
        "SI" => number.len() == 8 && digits(number),
        "SK" => number.len() == 10 && digits(number),
        // XI (Northern Ireland) kept the GB format
        "XI" => number.len() == 9 && digits(number),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Normalization ---

    #[test]
    fn strips_separators_and_uppercases() {
        assert_eq!(normalize_vat_number("123-456-78-90"), "1234567890");
        assert_eq!(normalize_vat_number("nl 8043.46.160.b01"), "NL804346160B01");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize_vat_number(""), "");
        assert_eq!(normalize_vat_number("---  ///"), "");
    }

    #[test]
    fn idempotent() {
        let once = normalize_vat_number("atU-123 45x678");
        assert_eq!(normalize_vat_number(&once), once);
    }

    #[test]
    fn non_ascii_letters_dropped() {
        assert_eq!(normalize_vat_number("żółć123"), "123");
    }

    // --- Country code ---

    #[test]
    fn accepts_members_case_insensitively() {
        assert_eq!(validate_country_code("pl").unwrap(), "PL");
        assert_eq!(validate_country_code(" De ").unwrap(), "DE");
        assert_eq!(validate_country_code("XI").unwrap(), "XI");
    }

    #[test]
    fn rejects_non_letters() {
        assert!(validate_country_code("P1").is_err());
        assert!(validate_country_code("<s").is_err());
        assert!(validate_country_code("PLX").is_err());
        assert!(validate_country_code("").is_err());
    }

    #[test]
    fn rejects_non_members() {
        assert!(validate_country_code("US").is_err());
        assert!(validate_country_code("GB").is_err());
    }

    #[test]
    fn greece_hint() {
        let err = validate_country_code("GR").unwrap_err();
        assert!(err.to_string().contains("EL"));
    }

    // --- Format pre-check ---

    #[test]
    fn pl_format() {
        assert!(vat_number_format_ok("PL", "1234567890"));
        assert!(!vat_number_format_ok("PL", "123456789"));
    }

    #[test]
    fn de_format() {
        assert!(vat_number_format_ok("DE", "123456789"));
        assert!(!vat_number_format_ok("DE", "023456789"));
    }

    #[test]
    fn at_requires_u_prefix() {
        assert!(vat_number_format_ok("AT", "U12345678"));
        assert!(!vat_number_format_ok("AT", "112345678"));
    }

    #[test]
    fn nl_b_marker() {
        assert!(vat_number_format_ok("NL", "123456789B01"));
        assert!(!vat_number_format_ok("NL", "123456789A01"));
    }

    #[test]
    fn unknown_country_passes() {
        assert!(vat_number_format_ok("ZZ", "whatever"));
    }
}
