use crate::config::defaults::{
    DUAL_QR_DEFAULT_INCHES, MAX_CARD_HEIGHT_INCHES, MAX_CARD_WIDTH_INCHES, MAX_PREVIEW_HEIGHT,
    MAX_PREVIEW_WIDTH, MAX_SCALE_RATIO, MIN_CARD_INCHES, MIN_PREVIEW_HEIGHT, MIN_SCALE_RATIO,
};
use crate::error::SizeError;
use crate::model::{CardFormat, CardSize, CustomSize, PhysicalSize, SizeTokens, Unit};

use super::tables::{preset_size, preset_tokens, reference_size, Preset};
use super::units::{custom_to_inches, format_length, physical_to_custom};

/// Slack for values entered exactly on a bound in mm or px
const BOUND_EPSILON: f64 = 1e-9;

/// Physical print size in inches.
///
/// Custom sizes are converted verbatim; range checks are
/// [`validate_custom_size`]'s job.
pub fn physical_size(format: CardFormat, size: &CardSize) -> PhysicalSize {
    match size {
        CardSize::Small => preset_size(format, Preset::Small),
        CardSize::Medium => preset_size(format, Preset::Medium),
        CardSize::Large => preset_size(format, Preset::Large),
        CardSize::Custom(custom) => custom_to_inches(custom),
    }
}

/// Check a custom size against the printable range (2"×2" up to 12"×18").
///
/// Bound messages are expressed in the size's own unit.
pub fn validate_custom_size(size: &CustomSize) -> Result<(), SizeError> {
    // Written to also reject NaN
    if !(size.width > 0.0 && size.height > 0.0) {
        return Err(SizeError::NotPositive);
    }

    let inches = custom_to_inches(size);

    if inches.width < MIN_CARD_INCHES - BOUND_EPSILON
        || inches.height < MIN_CARD_INCHES - BOUND_EPSILON
    {
        let min = format_length(MIN_CARD_INCHES, size.unit);
        return Err(SizeError::TooSmall {
            min: format!("{} × {}", min, min),
        });
    }

    if inches.width > MAX_CARD_WIDTH_INCHES + BOUND_EPSILON
        || inches.height > MAX_CARD_HEIGHT_INCHES + BOUND_EPSILON
    {
        return Err(SizeError::TooLarge {
            max: format!(
                "{} × {}",
                format_length(MAX_CARD_WIDTH_INCHES, size.unit),
                format_length(MAX_CARD_HEIGHT_INCHES, size.unit)
            ),
        });
    }

    Ok(())
}

/// Scale factor applied to the medium tokens for a custom size:
/// the smaller of the width and height ratios to the format's reference
/// size, clamped to 0.6..=1.5.
pub fn custom_scale_ratio(format: CardFormat, size: &CustomSize) -> f64 {
    let inches = custom_to_inches(size);
    let reference = reference_size(format);
    let width_ratio = inches.width / reference.width;
    let height_ratio = inches.height / reference.height;
    width_ratio
        .min(height_ratio)
        .clamp(MIN_SCALE_RATIO, MAX_SCALE_RATIO)
}

/// Preview layout tokens for a format and size.
///
/// Returns `None` when no tokens can be derived (a custom size with
/// non-positive or non-finite dimensions); callers skip rendering.
pub fn size_tokens(format: CardFormat, size: &CardSize) -> Option<SizeTokens> {
    match size {
        CardSize::Small => Some(preset_tokens(format, Preset::Small)),
        CardSize::Medium => Some(preset_tokens(format, Preset::Medium)),
        CardSize::Large => Some(preset_tokens(format, Preset::Large)),
        CardSize::Custom(custom) => custom_tokens(format, custom),
    }
}

fn custom_tokens(format: CardFormat, custom: &CustomSize) -> Option<SizeTokens> {
    let inches = custom_to_inches(custom);
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(inches.width) || !usable(inches.height) {
        log::warn!(
            "No size tokens for {} card at {}, skipping preview",
            format,
            custom
        );
        return None;
    }

    let baseline = preset_tokens(format, Preset::Medium);
    let reference = reference_size(format);

    let width_ratio = inches.width / reference.width;
    let height_ratio = inches.height / reference.height;
    let ratio = custom_scale_ratio(format, custom);

    let mut tokens = baseline.scaled(ratio);

    // Preview box keeps the requested aspect, not the preset's
    let aspect = inches.width / inches.height;
    let mut width = baseline.card_width as f64 * width_ratio;
    let mut height = baseline.card_height as f64 * height_ratio;

    if width > MAX_PREVIEW_WIDTH {
        width = MAX_PREVIEW_WIDTH;
        height = width / aspect;
    }
    if height > MAX_PREVIEW_HEIGHT {
        height = MAX_PREVIEW_HEIGHT;
        width = height * aspect;
    }
    if height < MIN_PREVIEW_HEIGHT {
        height = MIN_PREVIEW_HEIGHT;
        width = height * aspect;
    }

    tokens.card_width = width.round() as u32;
    tokens.card_height = height.round() as u32;

    log::debug!(
        "Custom {} tokens: scale {:.3}, preview {}x{}",
        format,
        ratio,
        tokens.card_width,
        tokens.card_height
    );

    Some(tokens)
}

/// Starting dimensions offered when the user switches to a custom size.
///
/// Table tent and square start from their medium preset; dual QR starts
/// at 4"×6", larger than its medium preset.
pub fn default_custom_size(format: CardFormat, unit: Unit) -> CustomSize {
    let inches = match format {
        CardFormat::TableTent | CardFormat::Square => preset_size(format, Preset::Medium),
        CardFormat::DualQr => PhysicalSize::new(DUAL_QR_DEFAULT_INCHES.0, DUAL_QR_DEFAULT_INCHES.1),
    };
    physical_to_custom(inches, unit)
}
