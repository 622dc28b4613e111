//! Helper utilities for PDF rendering

pub mod compress;
pub mod layer;

pub use compress::compress_pdf;
pub use layer::{pdf_color, LayerBuilder};
