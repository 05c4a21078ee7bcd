use thiserror::Error;

/// Errors that can occur while performing a VAT check.
///
/// Transport and parse failures are deliberately *not* fatal for callers:
/// the HTTP handler folds them into an ordinary "could not be verified"
/// reply. Only [`CheckError::Render`] surfaces as a server fault.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// Caller-supplied input was rejected before any network call.
    #[error("invalid input: {0}")]
    Input(String),

    /// The VIES service could not be reached or returned a non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),

    /// XML generation error while building the SOAP envelope.
    #[error("XML error: {0}")]
    Xml(String),

    /// PDF report generation failed.
    #[error("render error: {0}")]
    Render(String),
}
