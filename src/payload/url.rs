//! URL checks.
//!
//! Two validators on purpose: QR URL payloads accept anything a WHATWG URL
//! parser accepts (`mailto:`, `tel:`, custom app schemes), while feedback
//! links printed on the card must be web pages.

use url::Url;

use crate::error::PayloadError;

/// True when `value` parses as an absolute URL of any scheme
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value.trim()).is_ok()
}

/// Validate a URL used as a QR payload
pub fn validate_qr_url(value: &str) -> Result<(), PayloadError> {
    if value.trim().is_empty() {
        return Err(PayloadError::UrlRequired);
    }
    if !is_valid_url(value) {
        return Err(PayloadError::InvalidUrl);
    }
    Ok(())
}

/// Validate a feedback link: must be an absolute http or https URL
pub fn validate_feedback_url(value: &str) -> Result<(), PayloadError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PayloadError::UrlRequired);
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(PayloadError::InvalidUrl),
    }
}
