/// Print resolution assumed for pixel units
pub const PRINT_DPI: f64 = 300.0;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Smallest printable card edge in inches (below this the QR stops scanning reliably)
pub const MIN_CARD_INCHES: f64 = 2.0;

/// Largest card width in inches
pub const MAX_CARD_WIDTH_INCHES: f64 = 12.0;

/// Largest card height in inches
pub const MAX_CARD_HEIGHT_INCHES: f64 = 18.0;

/// Reference physical size (width, height) in inches for portrait formats
/// (table tent and dual QR). Custom sizes scale tokens relative to this.
pub const PORTRAIT_REFERENCE_INCHES: (f64, f64) = (3.2, 4.8);

/// Reference physical size (width, height) in inches for the square format
pub const SQUARE_REFERENCE_INCHES: (f64, f64) = (3.6, 3.6);

/// Default custom size for dual QR cards, larger than its medium preset
pub const DUAL_QR_DEFAULT_INCHES: (f64, f64) = (4.0, 6.0);

/// Lower bound of the custom token scale factor
pub const MIN_SCALE_RATIO: f64 = 0.6;

/// Upper bound of the custom token scale factor
pub const MAX_SCALE_RATIO: f64 = 1.5;

/// Largest preview card width in pixels
pub const MAX_PREVIEW_WIDTH: f64 = 320.0;

/// Largest preview card height in pixels
pub const MAX_PREVIEW_HEIGHT: f64 = 420.0;

/// Smallest preview card height in pixels
pub const MIN_PREVIEW_HEIGHT: f64 = 180.0;

/// Decimal places kept when converting inches back to each unit
pub const INCH_DECIMALS: i32 = 2;
pub const MM_DECIMALS: i32 = 1;
pub const PX_DECIMALS: i32 = 0;

/// Base URL of the redirect service used for multi-device QR codes
pub const DEFAULT_REDIRECT_BASE: &str = "https://qrfeedback.app";

/// Default QR module color
pub const DEFAULT_DARK_COLOR: &str = "#000000";

/// Default card background color
pub const DEFAULT_LIGHT_COLOR: &str = "#ffffff";

/// Card outline thickness on proofs, in points
pub const PROOF_OUTLINE_THICKNESS: f32 = 0.5;

/// Light modules kept around the QR symbol on proofs
pub const QR_QUIET_ZONE_MODULES: usize = 4;

/// Smallest edge of an SVG QR code, in pixels
pub const DEFAULT_SVG_SIZE: u32 = 200;
