use crate::config::defaults::DEFAULT_REDIRECT_BASE;
use crate::error::PayloadError;
use crate::model::{CalendarData, MultiUrlData, QrData, VCardData, WifiData, WifiEncryption};
use crate::parser::datetime::parse_calendar_time;

use super::present;
use super::redirect::{RedirectEndpoint, RedirectResolver};
use super::validate::validate_qr_data;

/// Text that goes into the QR code for `data`.
///
/// Performs no validation: callers must get `Ok` from
/// [`validate_qr_data`] first. Invalid records produce an unspecified
/// (but non-panicking) string.
pub fn generate_qr_data(data: &QrData, redirect: &impl RedirectResolver) -> String {
    match data {
        QrData::Url(url) => url.url.trim().to_string(),
        QrData::VCard(vcard) => vcard_payload(vcard),
        QrData::WiFi(wifi) => wifi_payload(wifi),
        QrData::Calendar(event) => calendar_payload(event),
        QrData::MultiUrl(multi) => multi_url_payload(multi, redirect),
        QrData::Image(image) => image.image_url.trim().to_string(),
    }
}

/// Escape a vCard/iCalendar text value
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | ';' | ',' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Escape a Wi-Fi QR field value
fn escape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | '"' | ':') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// vCard 3.0 block; optional properties appear only when filled in
fn vcard_payload(data: &VCardData) -> String {
    let first = data.first_name.trim();
    let last = data.last_name.trim();
    let full_name = format!("{} {}", first, last).trim().to_string();

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", escape_text(last), escape_text(first)),
        format!("FN:{}", escape_text(&full_name)),
    ];

    if let Some(phone) = present(&data.phone) {
        lines.push(format!("TEL:{}", phone));
    }
    if let Some(email) = present(&data.email) {
        lines.push(format!("EMAIL:{}", email));
    }
    if let Some(company) = present(&data.company) {
        lines.push(format!("ORG:{}", escape_text(company)));
    }
    if let Some(title) = present(&data.title) {
        lines.push(format!("TITLE:{}", escape_text(title)));
    }
    if let Some(website) = present(&data.website) {
        lines.push(format!("URL:{}", website));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// `WIFI:T:<enc>;S:<ssid>;P:<password>;H:true;;`
///
/// `P:` is left out for open networks and `H:` unless the network is hidden.
fn wifi_payload(data: &WifiData) -> String {
    let mut out = format!(
        "WIFI:T:{};S:{};",
        data.encryption.as_str(),
        escape_wifi(&data.ssid)
    );
    if data.encryption != WifiEncryption::NoPass {
        let password = data.password.as_deref().unwrap_or("");
        out.push_str(&format!("P:{};", escape_wifi(password)));
    }
    if data.hidden {
        out.push_str("H:true;");
    }
    out.push(';');
    out
}

/// iCal form of a date or date-time. Values that do not parse are emitted
/// trimmed but otherwise unchanged; `encode` rejects them before this point.
fn ical_time(value: &str) -> String {
    match parse_calendar_time(value) {
        Some(time) => time.to_ical(),
        None => value.trim().to_string(),
    }
}

/// Single-event iCalendar document
fn calendar_payload(data: &CalendarData) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", escape_text(data.title.trim())),
        format!("DTSTART:{}", ical_time(&data.start_date)),
        format!("DTEND:{}", ical_time(&data.end_date)),
    ];

    if let Some(location) = present(&data.location) {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }
    if let Some(description) = present(&data.description) {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}

fn multi_url_payload(data: &MultiUrlData, redirect: &impl RedirectResolver) -> String {
    let url = redirect.redirect_url(data);
    log::debug!(
        "Multi-URL payload {} (fallback {})",
        url,
        data.fallback_url.trim()
    );
    url
}

/// Turns QR data records into payload text, resolving multi-URL records
/// through a redirect service.
#[derive(Debug, Clone)]
pub struct PayloadEncoder<R = RedirectEndpoint> {
    redirect: R,
}

impl Default for PayloadEncoder<RedirectEndpoint> {
    fn default() -> Self {
        Self::new(RedirectEndpoint::new(DEFAULT_REDIRECT_BASE))
    }
}

impl<R: RedirectResolver> PayloadEncoder<R> {
    pub fn new(redirect: R) -> Self {
        Self { redirect }
    }

    /// Payload for an already validated record. See [`generate_qr_data`].
    pub fn generate(&self, data: &QrData) -> String {
        generate_qr_data(data, &self.redirect)
    }

    /// Validate, then generate
    pub fn encode(&self, data: &QrData) -> Result<String, PayloadError> {
        validate_qr_data(data)?;
        Ok(self.generate(data))
    }
}
