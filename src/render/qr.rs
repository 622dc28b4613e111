//! QR code rendering.
//!
//! [`QrRenderer`] is the seam for turning payload text into an image; the
//! crate ships an SVG implementation. [`QrMatrix`] exposes the raw module
//! grid for renderers that draw the modules themselves.

use qrcode::render::svg;
use qrcode::QrCode;

use crate::config::defaults::DEFAULT_SVG_SIZE;
use crate::error::RenderError;
use crate::model::HexColor;

/// Renders a payload as a QR image document
pub trait QrRenderer {
    fn render(&self, payload: &str) -> Result<String, RenderError>;
}

fn encode(payload: &str) -> Result<QrCode, RenderError> {
    QrCode::new(payload.as_bytes()).map_err(|e| RenderError::QrEncoding(e.to_string()))
}

/// SVG QR codes with a quiet zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgQrRenderer {
    dark: HexColor,
    light: HexColor,
}

impl Default for SvgQrRenderer {
    fn default() -> Self {
        Self::new(HexColor::BLACK, HexColor::WHITE)
    }
}

impl SvgQrRenderer {
    pub fn new(dark: HexColor, light: HexColor) -> Self {
        Self { dark, light }
    }
}

impl QrRenderer for SvgQrRenderer {
    fn render(&self, payload: &str) -> Result<String, RenderError> {
        let code = encode(payload)?;
        let dark = self.dark.to_string();
        let light = self.light.to_string();

        let image = code
            .render::<svg::Color>()
            .min_dimensions(DEFAULT_SVG_SIZE, DEFAULT_SVG_SIZE)
            .quiet_zone(true)
            .dark_color(svg::Color(&dark))
            .light_color(svg::Color(&light))
            .build();

        log::debug!(
            "Rendered {}x{} module QR as SVG ({} bytes)",
            code.width(),
            code.width(),
            image.len()
        );
        Ok(image)
    }
}

/// Square grid of QR modules, row-major, `true` for dark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn encode(payload: &str) -> Result<Self, RenderError> {
        let code = encode(payload)?;
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        Ok(Self {
            width: code.width(),
            modules,
        })
    }

    /// Modules per side, without quiet zone
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Horizontal runs of dark modules in `row` as `(start, length)`
    pub fn dark_runs(&self, row: usize) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut start = None;
        for x in 0..=self.width {
            match (self.is_dark(x, row), start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_has_finder_pattern() {
        let matrix = QrMatrix::encode("https://example.com/review").unwrap();
        assert!(matrix.width() >= 21);
        assert_eq!((matrix.width() - 17) % 4, 0);

        // top-left finder: dark ring, light ring, dark core
        assert!(matrix.is_dark(0, 0));
        assert!(!matrix.is_dark(1, 1));
        assert!(matrix.is_dark(3, 3));
        assert_eq!(matrix.dark_runs(0)[0], (0, 7));
    }

    #[test]
    fn test_out_of_range_is_light() {
        let matrix = QrMatrix::encode("x").unwrap();
        assert!(!matrix.is_dark(matrix.width(), 0));
        assert!(!matrix.is_dark(0, matrix.width() + 3));
    }

    #[test]
    fn test_runs_cover_dark_modules() {
        let matrix = QrMatrix::encode("WIFI:T:WPA;S:Cafe;P:secret;;").unwrap();
        for row in 0..matrix.width() {
            let from_runs: usize = matrix.dark_runs(row).iter().map(|(_, len)| len).sum();
            let counted = (0..matrix.width()).filter(|&x| matrix.is_dark(x, row)).count();
            assert_eq!(from_runs, counted);
        }
    }

    #[test]
    fn test_svg_uses_colors() {
        let renderer = SvgQrRenderer::new(
            HexColor {
                r: 0x1a,
                g: 0x2b,
                b: 0x3c,
            },
            HexColor::WHITE,
        );
        let svg = renderer.render("https://example.com").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#1a2b3c"));
        assert!(svg.contains("#ffffff"));
    }

    #[test]
    fn test_oversized_payload_fails() {
        let payload = "x".repeat(8000);
        let result = SvgQrRenderer::default().render(&payload);
        assert!(matches!(result, Err(RenderError::QrEncoding(_))));
    }
}
