//! Print proofs.
//!
//! A proof is a one-page PDF at the card's true physical size showing the
//! card edge and the QR codes at the size they will print. Text is not drawn.

use printpdf::{Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::defaults::{MM_PER_INCH, PROOF_OUTLINE_THICKNESS, QR_QUIET_ZONE_MODULES};
use crate::error::RenderError;
use crate::model::{CardDesign, CardFormat, CardSize, HexColor, QrData};
use crate::payload::{PayloadEncoder, RedirectEndpoint, RedirectResolver};
use crate::sizing::{physical_size, size_tokens, validate_custom_size};

use super::helpers::{compress_pdf, pdf_color, LayerBuilder};
use super::qr::QrMatrix;

const DEFAULT_TITLE: &str = "Feedback card proof";

const POINTS_PER_INCH: f32 = 72.0;

/// Page and QR placement for a proof, in millimetres from the bottom-left
#[derive(Debug, Clone, PartialEq)]
pub struct ProofLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub qr_side: f32,
    /// Top-left corner of each QR code, topmost first
    pub qr_origins: Vec<(f32, f32)>,
}

impl ProofLayout {
    pub fn new(format: CardFormat, size: &CardSize, codes: usize) -> Result<Self, RenderError> {
        if let CardSize::Custom(custom) = size {
            validate_custom_size(custom)?;
        }

        let tokens = size_tokens(format, size)
            .ok_or_else(|| RenderError::MissingTokens(format!("{} {}", format, size.name())))?;
        let physical = physical_size(format, size);

        let page_width = physical.width_mm() as f32;
        let page_height = physical.height_mm() as f32;
        let mm_per_px = page_width / tokens.card_width as f32;

        // Codes are centered at page_height * k / (codes + 1). A lone code may
        // use the full height; stacked codes must not overlap their neighbours.
        let slot = page_height / (codes + 1) as f32;
        let max_side = if codes > 1 { slot } else { 2.0 * slot };
        let scaled_side = tokens.qr_size as f32 * mm_per_px;
        let qr_side = scaled_side.min(page_width).min(max_side);
        if qr_side < scaled_side {
            log::warn!(
                "QR code shrunk from {:.1}mm to {:.1}mm to fit a {:.1}x{:.1}mm card",
                scaled_side,
                qr_side,
                page_width,
                page_height
            );
        }

        let left = (page_width - qr_side) / 2.0;
        let qr_origins = (0..codes)
            .map(|i| {
                let center = page_height * (codes - i) as f32 / (codes + 1) as f32;
                (left, center + qr_side / 2.0)
            })
            .collect();

        log::debug!(
            "Proof page {:.1}x{:.1}mm, QR side {:.1}mm ({} px scale {:.3})",
            page_width,
            page_height,
            qr_side,
            tokens.qr_size,
            mm_per_px
        );

        Ok(Self {
            page_width,
            page_height,
            qr_side,
            qr_origins,
        })
    }
}

/// Renders card designs to physical-size PDF proofs
pub struct ProofRenderer<R = RedirectEndpoint> {
    encoder: PayloadEncoder<R>,
}

impl Default for ProofRenderer<RedirectEndpoint> {
    fn default() -> Self {
        Self::new(PayloadEncoder::<RedirectEndpoint>::default())
    }
}

impl<R: RedirectResolver> ProofRenderer<R> {
    pub fn new(encoder: PayloadEncoder<R>) -> Self {
        Self { encoder }
    }

    /// Generate the proof PDF for `design`
    pub fn render(&self, design: &CardDesign) -> Result<Vec<u8>, RenderError> {
        let mut matrices = vec![self.matrix_for(&design.qr)?];
        match (&design.secondary_qr, design.format) {
            (Some(second), CardFormat::DualQr) => matrices.push(self.matrix_for(second)?),
            (Some(_), format) => {
                log::warn!("Ignoring secondary QR code on a {} card", format)
            }
            (None, _) => {}
        }

        let layout = ProofLayout::new(design.format, &design.size, matrices.len())?;

        let mut layer = LayerBuilder::new();
        draw_card(&mut layer, &layout, design.dark_color, design.light_color);
        layer.set_fill_color(pdf_color(design.dark_color));
        for (matrix, &(left, top)) in matrices.iter().zip(&layout.qr_origins) {
            draw_modules(&mut layer, matrix, left, top, layout.qr_side);
        }

        let title = match design.business_name.trim() {
            "" => DEFAULT_TITLE,
            name => name,
        };
        let mut doc = PdfDocument::new(title);
        doc.with_pages(vec![PdfPage::new(
            Mm(layout.page_width),
            Mm(layout.page_height),
            layer.into_ops(),
        )]);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

        log::info!(
            "Rendered {} proof with {} QR code(s), {} bytes before compression",
            design.format,
            matrices.len(),
            bytes.len()
        );

        match compress_pdf(&bytes) {
            Ok(compressed) => Ok(compressed),
            Err(e) => {
                log::warn!("Keeping uncompressed proof: {}", e);
                Ok(bytes)
            }
        }
    }

    fn matrix_for(&self, data: &QrData) -> Result<QrMatrix, RenderError> {
        let payload = self.encoder.encode(data)?;
        QrMatrix::encode(&payload)
    }
}

/// Card background and cut edge
fn draw_card(layer: &mut LayerBuilder, layout: &ProofLayout, dark: HexColor, light: HexColor) {
    let (w, h) = (layout.page_width, layout.page_height);
    layer.set_fill_color(pdf_color(light));
    layer.add_rect(Mm(0.0), Mm(0.0), Mm(w), Mm(h), PaintMode::Fill);

    // stroke is centered on the path; keep it on the page
    let inset = PROOF_OUTLINE_THICKNESS * MM_PER_INCH as f32 / POINTS_PER_INCH / 2.0;
    layer.set_outline_color(pdf_color(dark));
    layer.set_outline_thickness(PROOF_OUTLINE_THICKNESS);
    layer.add_rect(
        Mm(inset),
        Mm(inset),
        Mm(w - inset),
        Mm(h - inset),
        PaintMode::Stroke,
    );
}

/// Dark modules of `matrix` inside a `side`-mm square whose top-left is (left, top).
/// The square includes the quiet zone.
fn draw_modules(layer: &mut LayerBuilder, matrix: &QrMatrix, left: f32, top: f32, side: f32) {
    let span = matrix.width() + 2 * QR_QUIET_ZONE_MODULES;
    let module = side / span as f32;
    let x0 = left + QR_QUIET_ZONE_MODULES as f32 * module;
    let y0 = top - QR_QUIET_ZONE_MODULES as f32 * module;

    for row in 0..matrix.width() {
        for (start, len) in matrix.dark_runs(row) {
            layer.fill_box(
                x0 + start as f32 * module,
                y0 - row as f32 * module,
                len as f32 * module,
                module,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomSize, MultiUrlData, Unit, UrlData};

    fn url(url: &str) -> QrData {
        QrData::Url(UrlData {
            url: url.to_string(),
        })
    }

    fn design(format: CardFormat, size: CardSize) -> CardDesign {
        CardDesign {
            business_name: "Corner Cafe".to_string(),
            message: "How did we do?".to_string(),
            call_to_action: "Scan to review".to_string(),
            format,
            size,
            dark_color: HexColor::BLACK,
            light_color: HexColor::WHITE,
            qr: url("https://example.com/review"),
            secondary_qr: None,
        }
    }

    #[test]
    fn test_layout_table_tent_medium() {
        let layout = ProofLayout::new(CardFormat::TableTent, &CardSize::Medium, 1).unwrap();
        assert!((layout.page_width - 81.28).abs() < 1e-3);
        assert!((layout.page_height - 121.92).abs() < 1e-3);
        // 110px of a 240px-wide card
        assert!((layout.qr_side - 110.0 * 81.28 / 240.0).abs() < 1e-3);

        let (left, top) = layout.qr_origins[0];
        assert!((left * 2.0 + layout.qr_side - layout.page_width).abs() < 1e-3);
        assert!((top - layout.qr_side / 2.0 - layout.page_height / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_layout_two_codes_stack() {
        let layout = ProofLayout::new(CardFormat::DualQr, &CardSize::Medium, 2).unwrap();
        let (_, upper) = layout.qr_origins[0];
        let (_, lower) = layout.qr_origins[1];
        assert!(upper > lower);
        assert!(lower < upper - layout.qr_side);
    }

    fn assert_codes_on_page(layout: &ProofLayout) {
        assert!(layout.qr_side <= layout.page_width + 1e-4);
        for &(left, top) in &layout.qr_origins {
            assert!(left >= -1e-4);
            assert!(left + layout.qr_side <= layout.page_width + 1e-4);
            assert!(top <= layout.page_height + 1e-4);
            assert!(top - layout.qr_side >= -1e-4);
        }
        for pair in layout.qr_origins.windows(2) {
            assert!(pair[1].1 <= pair[0].1 - layout.qr_side + 1e-4);
        }
    }

    #[test]
    fn test_layout_tall_narrow_card_fits_width() {
        let size = CardSize::Custom(CustomSize::new(2.0, 18.0, Unit::Inch));
        let layout = ProofLayout::new(CardFormat::TableTent, &size, 1).unwrap();
        assert!((layout.page_width - 50.8).abs() < 1e-3);
        assert!(layout.qr_side <= layout.page_width);
        assert!(layout.qr_origins[0].0 >= 0.0);
        assert_codes_on_page(&layout);
    }

    #[test]
    fn test_layout_wide_short_card_fits_height() {
        let size = CardSize::Custom(CustomSize::new(12.0, 2.0, Unit::Inch));
        for codes in 1..=2 {
            let layout = ProofLayout::new(CardFormat::DualQr, &size, codes).unwrap();
            assert_codes_on_page(&layout);
        }
    }

    #[test]
    fn test_layout_rejects_bad_custom_size() {
        let size = CardSize::Custom(CustomSize::new(1.0, 1.0, Unit::Inch));
        let result = ProofLayout::new(CardFormat::Square, &size, 1);
        assert!(matches!(result, Err(RenderError::InvalidSize(_))));
    }

    #[test]
    fn test_render_pdf() {
        let renderer: ProofRenderer = ProofRenderer::default();
        let bytes = renderer
            .render(&design(CardFormat::TableTent, CardSize::Medium))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_dual_qr_with_resolver() {
        let encoder = PayloadEncoder::new(|_: &MultiUrlData| "https://r.test/k".to_string());
        let renderer = ProofRenderer::new(encoder);
        let mut card = design(CardFormat::DualQr, CardSize::Large);
        card.secondary_qr = Some(QrData::MultiUrl(MultiUrlData {
            fallback_url: "https://example.com".to_string(),
            ..Default::default()
        }));
        let bytes = renderer.render(&card).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_rejects_invalid_payload() {
        let mut card = design(CardFormat::Square, CardSize::Small);
        card.qr = url("not a url");
        let renderer: ProofRenderer = ProofRenderer::default();
        let result = renderer.render(&card);
        assert!(matches!(result, Err(RenderError::InvalidPayload(_))));
    }
}
