pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod payload;
pub mod render;
pub mod sizing;

pub use config::Settings;
pub use error::{ConfigError, PayloadError, RenderError, SizeError};
pub use model::{CardDesign, CardFormat, CardSize, CustomSize, QrData, SizeTokens, Unit};
pub use payload::{generate_qr_data, validate_feedback_url, validate_qr_data, PayloadEncoder};
pub use render::{ProofRenderer, QrRenderer, SvgQrRenderer};
pub use sizing::{physical_size, size_tokens, validate_custom_size};

/// High-level API for rendering a card design to a print proof.
///
/// Validates the size and QR data, then returns a one-page PDF at the card's
/// physical size. Multi-device codes point at `settings.redirect_base`.
///
/// # Example
///
/// ```no_run
/// use feedback_card::{render_proof, CardDesign, Settings};
///
/// let json = std::fs::read_to_string("card.json").unwrap();
/// let design: CardDesign = serde_json::from_str(&json).unwrap();
///
/// let pdf_bytes = render_proof(&design, &Settings::default()).unwrap();
/// std::fs::write("card.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_proof(design: &CardDesign, settings: &Settings) -> Result<Vec<u8>, RenderError> {
    ProofRenderer::new(settings.payload_encoder()).render(design)
}
