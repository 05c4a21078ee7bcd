//! VIES member state code validation.
//!
//! VIES only answers for EU member states plus the two special codes
//! `EL` (Greece, instead of ISO `GR`) and `XI` (Northern Ireland under
//! the Windsor Framework).

/// Check whether `code` is a country code the VIES service accepts.
pub fn is_vies_member_code(code: &str) -> bool {
    VIES_MEMBER_CODES.binary_search(&code).is_ok()
}

/// Member state codes accepted by VIES. Sorted for binary search.
static VIES_MEMBER_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "HR", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK", "XI",
];
