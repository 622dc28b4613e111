//! Multi-device QR codes.
//!
//! A multi-URL card cannot put three destinations in one QR code. The code
//! carries a stable redirect URL instead; the redirect service looks up the
//! stored destinations and picks one from the scanning device's user agent.
//! Storing the destinations is the host application's job.

use sha2::{Digest, Sha256};

use crate::model::MultiUrlData;

use super::present;

/// Hex characters of the content hash used as the redirect key
const CONTENT_KEY_LEN: usize = 12;

/// Supplies the indirection URL encoded for a multi-URL record
pub trait RedirectResolver {
    fn redirect_url(&self, data: &MultiUrlData) -> String;
}

impl<F> RedirectResolver for F
where
    F: Fn(&MultiUrlData) -> String,
{
    fn redirect_url(&self, data: &MultiUrlData) -> String {
        self(data)
    }
}

/// Redirect service reachable at `<base_url>/r/<key>`, where the key is
/// derived from the record's destinations so equal records share a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEndpoint {
    base_url: String,
}

impl RedirectEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Stable key for a record's destinations
    pub fn content_key(data: &MultiUrlData) -> String {
        let mut hasher = Sha256::new();
        hasher.update(present(&data.ios_url).unwrap_or("").as_bytes());
        hasher.update(b"\n");
        hasher.update(present(&data.android_url).unwrap_or("").as_bytes());
        hasher.update(b"\n");
        hasher.update(data.fallback_url.trim().as_bytes());
        let digest = hasher.finalize();

        digest
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>()
            .chars()
            .take(CONTENT_KEY_LEN)
            .collect()
    }
}

impl RedirectResolver for RedirectEndpoint {
    fn redirect_url(&self, data: &MultiUrlData) -> String {
        format!(
            "{}/r/{}",
            self.base_url.trim_end_matches('/'),
            Self::content_key(data)
        )
    }
}

/// Device family of a scanner, as far as the redirect cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Ios,
    Android,
    Other,
}

impl Device {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ["iphone", "ipad", "ipod"].iter().any(|d| ua.contains(d)) {
            Device::Ios
        } else if ua.contains("android") {
            Device::Android
        } else {
            Device::Other
        }
    }
}

impl MultiUrlData {
    /// Destination for a scan from `user_agent`; the fallback covers other
    /// devices and devices without their own URL.
    pub fn target_for(&self, user_agent: &str) -> &str {
        let device_url = match Device::from_user_agent(user_agent) {
            Device::Ios => present(&self.ios_url),
            Device::Android => present(&self.android_url),
            Device::Other => None,
        };
        device_url.unwrap_or_else(|| self.fallback_url.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0";

    fn links() -> MultiUrlData {
        MultiUrlData {
            ios_url: Some("https://apps.apple.com/app/id1".to_string()),
            android_url: Some("https://play.google.com/store/apps/details?id=x".to_string()),
            fallback_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_target_per_device() {
        let data = links();
        assert_eq!(data.target_for(IPHONE_UA), "https://apps.apple.com/app/id1");
        assert_eq!(
            data.target_for(ANDROID_UA),
            "https://play.google.com/store/apps/details?id=x"
        );
        assert_eq!(data.target_for(DESKTOP_UA), "https://example.com");
    }

    #[test]
    fn test_missing_device_url_falls_back() {
        let data = MultiUrlData {
            android_url: Some("  ".to_string()),
            ..links()
        };
        assert_eq!(data.target_for(ANDROID_UA), "https://example.com");
    }

    #[test]
    fn test_endpoint_is_stable() {
        let endpoint = RedirectEndpoint::new("https://go.example.com/");
        let first = endpoint.redirect_url(&links());
        let second = endpoint.redirect_url(&links());
        assert_eq!(first, second);
        assert!(first.starts_with("https://go.example.com/r/"));
        assert_eq!(first.len(), "https://go.example.com/r/".len() + CONTENT_KEY_LEN);
    }

    #[test]
    fn test_endpoint_changes_with_destinations() {
        let endpoint = RedirectEndpoint::new("https://go.example.com");
        let other = MultiUrlData {
            fallback_url: "https://example.org".to_string(),
            ..links()
        };
        assert_ne!(endpoint.redirect_url(&links()), endpoint.redirect_url(&other));
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |data: &MultiUrlData| format!("https://r.test/{}", data.fallback_url.len());
        assert_eq!(resolver.redirect_url(&links()), "https://r.test/19");
    }
}
