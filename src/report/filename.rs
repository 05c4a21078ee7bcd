//! Download filename derivation for check reports.

/// Length bound for the sanitized name component.
const MAX_NAME_LEN: usize = 30;

/// Suggested download filename: `VIES_<COUNTRY>_<VAT>_<NAME>.pdf`.
///
/// `country_code` and `vat_number` are expected pre-normalized (letters
/// and digits only); the registered name is sanitized here.
pub fn report_filename(country_code: &str, vat_number: &str, name: Option<&str>) -> String {
    format!(
        "VIES_{}_{}_{}.pdf",
        country_code,
        vat_number,
        sanitize_name_component(name)
    )
}

/// Reduce a registered company name to a filename-safe component.
///
/// Spaces become hyphens, everything outside `A-Za-z0-9-` is dropped,
/// and the result is truncated to 30 characters. Falls back to
/// `"unknown"` when nothing survives (or no name was parsed).
pub fn sanitize_name_component(name: Option<&str>) -> String {
    let cleaned: String = name
        .unwrap_or_default()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .take(MAX_NAME_LEN)
        .collect();
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polish_company_suffix() {
        // Periods are stripped, spaces become hyphens
        assert_eq!(
            sanitize_name_component(Some("Test Sp. z o.o.")),
            "Test-Sp-z-oo"
        );
    }

    #[test]
    fn full_filename() {
        assert_eq!(
            report_filename("PL", "1234567890", Some("Test Sp. z o.o.")),
            "VIES_PL_1234567890_Test-Sp-z-oo.pdf"
        );
    }

    #[test]
    fn missing_name_falls_back() {
        assert_eq!(sanitize_name_component(None), "unknown");
        assert_eq!(sanitize_name_component(Some("żżż")), "unknown");
        assert_eq!(report_filename("DE", "123456789", None), "VIES_DE_123456789_unknown.pdf");
    }

    #[test]
    fn long_names_truncated() {
        let name = "A".repeat(100);
        assert_eq!(sanitize_name_component(Some(&name)).len(), MAX_NAME_LEN);
    }

    #[test]
    fn output_alphabet() {
        let s = sanitize_name_component(Some("ACME GmbH & Co. KG (Berlin)"));
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
}
