//! Hand-tuned preset sizes and preview tokens.
//!
//! These rows are design constants; keep them as data.

use crate::config::defaults::{PORTRAIT_REFERENCE_INCHES, SQUARE_REFERENCE_INCHES};
use crate::model::{CardFormat, PhysicalSize, SizeTokens};

/// Named preset size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Small,
    Medium,
    Large,
}

/// Physical preset sizes in inches, indexed Small/Medium/Large
const TABLE_TENT_SIZES: [PhysicalSize; 3] = [
    PhysicalSize::new(2.5, 3.75),
    PhysicalSize::new(PORTRAIT_REFERENCE_INCHES.0, PORTRAIT_REFERENCE_INCHES.1),
    PhysicalSize::new(4.0, 6.0),
];

const SQUARE_SIZES: [PhysicalSize; 3] = [
    PhysicalSize::new(3.0, 3.0),
    PhysicalSize::new(SQUARE_REFERENCE_INCHES.0, SQUARE_REFERENCE_INCHES.1),
    PhysicalSize::new(4.5, 4.5),
];

const DUAL_QR_SIZES: [PhysicalSize; 3] = [
    PhysicalSize::new(2.8, 4.2),
    PhysicalSize::new(PORTRAIT_REFERENCE_INCHES.0, PORTRAIT_REFERENCE_INCHES.1),
    PhysicalSize::new(3.6, 5.4),
];

#[allow(clippy::too_many_arguments)]
const fn row(
    card_width: u32,
    card_height: u32,
    padding: u32,
    title_font_size: u32,
    body_font_size: u32,
    cta_font_size: u32,
    qr_size: u32,
    qr_padding: u32,
    logo_max_width: u32,
    logo_max_height: u32,
    spacing: u32,
) -> SizeTokens {
    SizeTokens {
        card_width,
        card_height,
        padding,
        title_font_size,
        body_font_size,
        cta_font_size,
        qr_size,
        qr_padding,
        logo_max_width,
        logo_max_height,
        spacing,
    }
}

// cardW, cardH, padding, title, body, cta, qr, qrPad, logoW, logoH, spacing
const TABLE_TENT_TOKENS: [SizeTokens; 3] = [
    row(200, 300, 18, 18, 12, 13, 90, 6, 96, 40, 10),
    row(240, 360, 24, 22, 14, 16, 110, 8, 120, 48, 12),
    row(280, 420, 28, 26, 16, 18, 130, 10, 140, 56, 14),
];

const SQUARE_TOKENS: [SizeTokens; 3] = [
    row(240, 240, 18, 18, 12, 13, 100, 6, 90, 36, 10),
    row(280, 280, 22, 20, 13, 15, 120, 8, 110, 44, 12),
    row(320, 320, 26, 24, 15, 17, 140, 10, 130, 52, 14),
];

const DUAL_QR_TOKENS: [SizeTokens; 3] = [
    row(220, 330, 16, 18, 11, 12, 80, 6, 90, 36, 8),
    row(260, 390, 20, 20, 12, 14, 95, 8, 110, 44, 10),
    row(280, 420, 24, 22, 13, 15, 110, 10, 120, 48, 12),
];

impl Preset {
    fn index(self) -> usize {
        match self {
            Preset::Small => 0,
            Preset::Medium => 1,
            Preset::Large => 2,
        }
    }
}

/// Physical size of a preset
pub fn preset_size(format: CardFormat, preset: Preset) -> PhysicalSize {
    let table = match format {
        CardFormat::TableTent => &TABLE_TENT_SIZES,
        CardFormat::Square => &SQUARE_SIZES,
        CardFormat::DualQr => &DUAL_QR_SIZES,
    };
    table[preset.index()]
}

/// Preview tokens of a preset
pub fn preset_tokens(format: CardFormat, preset: Preset) -> SizeTokens {
    let table = match format {
        CardFormat::TableTent => &TABLE_TENT_TOKENS,
        CardFormat::Square => &SQUARE_TOKENS,
        CardFormat::DualQr => &DUAL_QR_TOKENS,
    };
    table[preset.index()]
}

/// Physical size custom sizes are scaled against
pub fn reference_size(format: CardFormat) -> PhysicalSize {
    let (width, height) = match format {
        CardFormat::TableTent | CardFormat::DualQr => PORTRAIT_REFERENCE_INCHES,
        CardFormat::Square => SQUARE_REFERENCE_INCHES,
    };
    PhysicalSize::new(width, height)
}
