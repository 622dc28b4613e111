use serde::Serialize;

/// Preview layout measurements for one card, all in preview pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeTokens {
    pub card_width: u32,
    pub card_height: u32,
    pub padding: u32,
    pub title_font_size: u32,
    pub body_font_size: u32,
    pub cta_font_size: u32,
    pub qr_size: u32,
    pub qr_padding: u32,
    pub logo_max_width: u32,
    pub logo_max_height: u32,
    pub spacing: u32,
}

impl SizeTokens {
    /// Copy of these tokens with every non-dimensional token scaled by `ratio`.
    ///
    /// Card width and height are left untouched.
    pub fn scaled(&self, ratio: f64) -> Self {
        let scale = |v: u32| (v as f64 * ratio).round() as u32;
        Self {
            card_width: self.card_width,
            card_height: self.card_height,
            padding: scale(self.padding),
            title_font_size: scale(self.title_font_size),
            body_font_size: scale(self.body_font_size),
            cta_font_size: scale(self.cta_font_size),
            qr_size: scale(self.qr_size),
            qr_padding: scale(self.qr_padding),
            logo_max_width: scale(self.logo_max_width),
            logo_max_height: scale(self.logo_max_height),
            spacing: scale(self.spacing),
        }
    }

    /// Preview width/height aspect ratio
    pub fn aspect_ratio(&self) -> f64 {
        self.card_width as f64 / self.card_height as f64
    }
}
