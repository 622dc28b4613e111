//! PDF compression helper
//!
//! printpdf writes uncompressed content streams; a QR proof is hundreds of
//! small rectangles, so the streams are run through lopdf before saving.

use std::io::Cursor;

use crate::error::RenderError;

/// Re-save `uncompressed` with every stream compressed
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e))
    })?;

    Ok(output.into_inner())
}
