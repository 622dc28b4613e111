//! QR payload validation and encoding.

pub mod encode;
pub mod redirect;
pub mod url;
pub mod validate;

pub use encode::{generate_qr_data, PayloadEncoder};
pub use redirect::{Device, RedirectEndpoint, RedirectResolver};
pub use url::{is_valid_url, validate_feedback_url, validate_qr_url};
pub use validate::validate_qr_data;

/// Trimmed value of an optional field, or `None` when absent or blank
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
