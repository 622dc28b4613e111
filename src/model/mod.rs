pub mod design;
pub mod format;
pub mod qr_data;
pub mod tokens;

pub use design::{CardDesign, HexColor};
pub use format::{CardFormat, CardSize, CustomSize, PhysicalSize, Unit};
pub use qr_data::{
    CalendarData, ImageData, MultiUrlData, QrData, QrType, UrlData, VCardData, WifiData,
    WifiEncryption,
};
pub use tokens::SizeTokens;
