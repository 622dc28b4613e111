use crate::cli::{Args, Command};
use crate::model::{HexColor, Unit};
use crate::payload::{PayloadEncoder, RedirectEndpoint};
use crate::render::SvgQrRenderer;

use super::defaults::*;

/// Runtime settings for sizing and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Redirect service for multi-device QR codes
    pub redirect_base: String,
    /// Unit used for custom sizes and size output
    pub unit: Unit,
    /// QR module color for image output
    pub dark_color: HexColor,
    /// QR background color for image output
    pub light_color: HexColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            redirect_base: DEFAULT_REDIRECT_BASE.to_string(),
            unit: Unit::default(),
            dark_color: DEFAULT_DARK_COLOR.parse().unwrap_or(HexColor::BLACK),
            light_color: DEFAULT_LIGHT_COLOR.parse().unwrap_or(HexColor::WHITE),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self::default();

        if let Some(base) = &args.redirect_base {
            settings.redirect_base = base.trim().to_string();
        }

        match &args.command {
            Command::Size { unit, .. } => settings.unit = *unit,
            Command::Payload { dark, light, .. } => {
                if let Some(dark) = dark {
                    settings.dark_color = *dark;
                }
                if let Some(light) = light {
                    settings.light_color = *light;
                }
            }
            Command::Proof { .. } => {}
        }

        settings
    }

    /// Payload encoder that sends multi-URL codes through `redirect_base`
    pub fn payload_encoder(&self) -> PayloadEncoder {
        PayloadEncoder::new(RedirectEndpoint::new(self.redirect_base.clone()))
    }

    pub fn svg_renderer(&self) -> SvgQrRenderer {
        SvgQrRenderer::new(self.dark_color, self.light_color)
    }
}
