//! Check report rendering.
//!
//! Pure text-and-bytes work: XML pretty-printing and wrapping for the
//! transcript section, download filename derivation, and the PDF itself.
//! No network or disk access happens here — persistence and delivery are
//! the caller's concern.

mod filename;
mod pdf;
mod pretty;

pub use filename::{report_filename, sanitize_name_component};
pub use pdf::render_report;
pub use pretty::{pretty_print_xml, wrap_line};

use chrono::NaiveDateTime;

use crate::core::{CheckError, Report, SoapTranscript, VatCheckResult, VatQuery};

/// Render the PDF and derive its download filename in one step.
pub fn build_report(
    query: &VatQuery,
    result: &VatCheckResult,
    transcript: &SoapTranscript,
    checked_at: NaiveDateTime,
) -> Result<Report, CheckError> {
    let bytes = render_report(query, result, transcript, checked_at)?;
    let filename = report_filename(
        &query.country_code,
        &query.vat_number,
        result.name.as_deref(),
    );
    Ok(Report { bytes, filename })
}
