use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_DARK_COLOR, DEFAULT_LIGHT_COLOR};
use crate::error::ConfigError;
use crate::parser::color::parse_hex_color;

use super::format::{CardFormat, CardSize};
use super::qr_data::QrData;

/// 8-bit RGB color written as `#RRGGBB` (or `#RGB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };
    pub const WHITE: HexColor = HexColor {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Components scaled to 0.0-1.0
    pub fn to_unit_rgb(self) -> (f32, f32, f32) {
        let scale = |v: u8| v as f32 / 255.0;
        (scale(self.r), scale(self.g), scale(self.b))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn default_dark() -> HexColor {
    DEFAULT_DARK_COLOR.parse().unwrap_or(HexColor::BLACK)
}

fn default_light() -> HexColor {
    DEFAULT_LIGHT_COLOR.parse().unwrap_or(HexColor::WHITE)
}

/// A complete feedback card as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDesign {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub call_to_action: String,
    #[serde(default)]
    pub format: CardFormat,
    #[serde(default)]
    pub size: CardSize,
    #[serde(default = "default_dark")]
    pub dark_color: HexColor,
    #[serde(default = "default_light")]
    pub light_color: HexColor,
    pub qr: QrData,
    /// Second code of a dual-QR card; ignored by other formats
    #[serde(default)]
    pub secondary_qr: Option<QrData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::format::{CustomSize, Unit};

    #[test]
    fn test_design_defaults() {
        let design: CardDesign =
            serde_json::from_str(r#"{"qr":{"type":"url","url":"https://example.com"}}"#).unwrap();
        assert_eq!(design.format, CardFormat::TableTent);
        assert_eq!(design.size, CardSize::Medium);
        assert_eq!(design.dark_color, HexColor::BLACK);
        assert_eq!(design.light_color, HexColor::WHITE);
        assert_eq!(design.secondary_qr, None);
    }

    #[test]
    fn test_design_with_custom_size_and_colors() {
        let design: CardDesign = serde_json::from_str(
            r##"{
                "businessName": "Corner Cafe",
                "format": "square",
                "size": {"custom": {"width": 100, "height": 100, "unit": "mm"}},
                "darkColor": "#1a2B3c",
                "lightColor": "#fff",
                "qr": {"type": "image", "imageUrl": "https://example.com/menu.png"}
            }"##,
        )
        .unwrap();
        assert_eq!(design.business_name, "Corner Cafe");
        assert_eq!(design.size, CardSize::Custom(CustomSize::new(100.0, 100.0, Unit::Mm)));
        assert_eq!(design.dark_color, HexColor { r: 0x1a, g: 0x2b, b: 0x3c });
        assert_eq!(design.light_color, HexColor::WHITE);
    }

    #[test]
    fn test_custom_size_without_dimensions_is_medium() {
        let design: CardDesign = serde_json::from_str(
            r#"{"size": "custom", "qr": {"type": "url", "url": "https://example.com"}}"#,
        )
        .unwrap();
        assert_eq!(design.size, CardSize::Medium);
    }

    #[test]
    fn test_bad_color_rejected() {
        let result: Result<CardDesign, _> = serde_json::from_str(
            r#"{"darkColor": "navy", "qr": {"type": "url", "url": "https://example.com"}}"#,
        );
        assert!(result.is_err());
    }
}
