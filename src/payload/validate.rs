use crate::error::PayloadError;
use crate::model::{
    CalendarData, ImageData, MultiUrlData, QrData, UrlData, VCardData, WifiData, WifiEncryption,
};
use crate::parser::datetime::parse_calendar_time;

use super::present;
use super::url::validate_qr_url;

/// Check that a QR data record has everything its payload needs.
///
/// Must pass before [`super::generate_qr_data`] is called.
pub fn validate_qr_data(data: &QrData) -> Result<(), PayloadError> {
    match data {
        QrData::Url(url) => validate_url(url),
        QrData::VCard(vcard) => validate_vcard(vcard),
        QrData::WiFi(wifi) => validate_wifi(wifi),
        QrData::Calendar(event) => validate_calendar(event),
        QrData::MultiUrl(multi) => validate_multi_url(multi),
        QrData::Image(image) => validate_image(image),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn validate_url(data: &UrlData) -> Result<(), PayloadError> {
    validate_qr_url(&data.url)
}

fn validate_vcard(data: &VCardData) -> Result<(), PayloadError> {
    if is_blank(&data.first_name) && is_blank(&data.last_name) {
        return Err(PayloadError::NameRequired);
    }
    Ok(())
}

fn validate_wifi(data: &WifiData) -> Result<(), PayloadError> {
    if is_blank(&data.ssid) {
        return Err(PayloadError::SsidRequired);
    }
    if data.encryption != WifiEncryption::NoPass && present(&data.password).is_none() {
        return Err(PayloadError::PasswordRequired);
    }
    Ok(())
}

fn validate_calendar(data: &CalendarData) -> Result<(), PayloadError> {
    if is_blank(&data.title) {
        return Err(PayloadError::TitleRequired);
    }
    if is_blank(&data.start_date) {
        return Err(PayloadError::StartDateRequired);
    }
    if is_blank(&data.end_date) {
        return Err(PayloadError::EndDateRequired);
    }

    let start = parse_calendar_time(&data.start_date)
        .ok_or_else(|| PayloadError::InvalidDate(data.start_date.clone()))?;
    let end = parse_calendar_time(&data.end_date)
        .ok_or_else(|| PayloadError::InvalidDate(data.end_date.clone()))?;

    if end.instant() < start.instant() {
        return Err(PayloadError::EndBeforeStart);
    }
    Ok(())
}

fn validate_multi_url(data: &MultiUrlData) -> Result<(), PayloadError> {
    if is_blank(&data.fallback_url) {
        return Err(PayloadError::FallbackUrlRequired);
    }
    Ok(())
}

fn validate_image(data: &ImageData) -> Result<(), PayloadError> {
    if is_blank(&data.image_url) {
        return Err(PayloadError::ImageUrlRequired);
    }
    Ok(())
}
