//! QR and PDF rendering

pub mod helpers;
pub mod proof;
pub mod qr;

pub use helpers::LayerBuilder;
pub use proof::{ProofLayout, ProofRenderer};
pub use qr::{QrMatrix, QrRenderer, SvgQrRenderer};
