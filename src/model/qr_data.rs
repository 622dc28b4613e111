use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of content carried by a QR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrType {
    Url,
    VCard,
    WiFi,
    Calendar,
    MultiUrl,
    Image,
}

impl QrType {
    pub fn name(&self) -> &'static str {
        match self {
            QrType::Url => "url",
            QrType::VCard => "vcard",
            QrType::WiFi => "wifi",
            QrType::Calendar => "calendar",
            QrType::MultiUrl => "multi-url",
            QrType::Image => "image",
        }
    }
}

impl fmt::Display for QrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlData {
    #[serde(default)]
    pub url: String,
}

/// Contact card fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VCardData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiEncryption {
    /// Value of the `T:` field in a Wi-Fi QR string
    pub fn as_str(&self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::NoPass => "nopass",
        }
    }
}

/// Wi-Fi network credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiData {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub encryption: WifiEncryption,
    #[serde(default)]
    pub hidden: bool,
}

/// Calendar event. Dates are `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`,
/// optionally followed by `Z` or a `±HH:MM` offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-device destinations behind a single redirecting QR code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiUrlData {
    #[serde(default)]
    pub ios_url: Option<String>,
    #[serde(default)]
    pub android_url: Option<String>,
    #[serde(default)]
    pub fallback_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    #[serde(default)]
    pub image_url: String,
}

/// A QR type together with its data record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QrData {
    #[serde(rename = "url")]
    Url(UrlData),
    #[serde(rename = "vcard")]
    VCard(VCardData),
    #[serde(rename = "wifi")]
    WiFi(WifiData),
    #[serde(rename = "calendar")]
    Calendar(CalendarData),
    #[serde(rename = "multi-url")]
    MultiUrl(MultiUrlData),
    #[serde(rename = "image")]
    Image(ImageData),
}

impl QrData {
    pub fn qr_type(&self) -> QrType {
        match self {
            QrData::Url(_) => QrType::Url,
            QrData::VCard(_) => QrType::VCard,
            QrData::WiFi(_) => QrType::WiFi,
            QrData::Calendar(_) => QrType::Calendar,
            QrData::MultiUrl(_) => QrType::MultiUrl,
            QrData::Image(_) => QrType::Image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_wifi_record() {
        let data: QrData = serde_json::from_str(
            r#"{"type":"wifi","ssid":"Cafe","encryption":"nopass","hidden":true}"#,
        )
        .unwrap();
        assert_eq!(data.qr_type(), QrType::WiFi);
        match data {
            QrData::WiFi(wifi) => {
                assert_eq!(wifi.ssid, "Cafe");
                assert_eq!(wifi.encryption, WifiEncryption::NoPass);
                assert!(wifi.hidden);
                assert_eq!(wifi.password, None);
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_camel_case_fields() {
        let data: QrData = serde_json::from_str(
            r#"{"type":"multi-url","iosUrl":"https://apps.apple.com/x","fallbackUrl":"https://x.test"}"#,
        )
        .unwrap();
        assert_eq!(
            data,
            QrData::MultiUrl(MultiUrlData {
                ios_url: Some("https://apps.apple.com/x".to_string()),
                android_url: None,
                fallback_url: "https://x.test".to_string(),
            })
        );
    }
}
