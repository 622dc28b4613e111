//! Operation builder for printpdf 0.8 pages
//!
//! Collects drawing operations into a `Vec<Op>` that becomes one `PdfPage`.

use printpdf::{
    Color, LinePoint, Mm, Op, PaintMode, Point, Polygon, PolygonRing, Pt, Rgb, WindingOrder,
};

use crate::model::HexColor;

/// Convert a design color to a printpdf fill/stroke color
pub fn pdf_color(color: HexColor) -> Color {
    let (r, g, b) = color.to_unit_rgb();
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// A builder that collects PDF operations for a single page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Stroke width in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Rectangle from its lower-left (x1, y1) to upper-right (x2, y2) corner
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        let corner = |x: Mm, y: Mm| LinePoint {
            p: Point {
                x: x.into(),
                y: y.into(),
            },
            bezier: false,
        };
        let points = vec![
            corner(x1, y1),
            corner(x2, y1),
            corner(x2, y2),
            corner(x1, y2),
        ];

        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Filled rectangle given by its top-left corner and extent (PDF y grows upward)
    pub fn fill_box(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.add_rect(
            Mm(left),
            Mm(top - height),
            Mm(left + width),
            Mm(top),
            PaintMode::Fill,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_one_polygon() {
        let mut layer = LayerBuilder::new();
        layer.set_fill_color(pdf_color(HexColor::BLACK));
        layer.add_rect(Mm(0.0), Mm(0.0), Mm(10.0), Mm(5.0), PaintMode::Fill);
        layer.fill_box(1.0, 4.0, 2.0, 2.0);

        let ops = layer.into_ops();
        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], Op::SetFillColor { .. }));
        match &ops[1] {
            Op::DrawPolygon { polygon } => {
                assert_eq!(polygon.rings.len(), 1);
                assert_eq!(polygon.rings[0].points.len(), 4);
            }
            _ => panic!("expected a polygon"),
        }
    }
}
