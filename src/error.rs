use thiserror::Error;

/// Reasons a custom card size is rejected.
///
/// The `Display` text is shown to the user as-is; the variant is the stable
/// machine-readable reason.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizeError {
    #[error("Dimensions must be positive")]
    NotPositive,

    #[error("Minimum size is {min} for scannable QR")]
    TooSmall { min: String },

    #[error("Maximum size is {max} for print safety")]
    TooLarge { max: String },
}

/// Reasons a QR data record fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("URL is required")]
    UrlRequired,

    #[error("Please enter a valid URL")]
    InvalidUrl,

    #[error("First name or last name is required")]
    NameRequired,

    #[error("Network name (SSID) is required")]
    SsidRequired,

    #[error("Password is required for secured networks")]
    PasswordRequired,

    #[error("Event title is required")]
    TitleRequired,

    #[error("Start date is required")]
    StartDateRequired,

    #[error("End date is required")]
    EndDateRequired,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("End date must be after start date")]
    EndBeforeStart,

    #[error("Fallback URL is required")]
    FallbackUrlRequired,

    #[error("Image URL is required")]
    ImageUrlRequired,
}

/// Failures while producing a QR image or proof
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("QR encoding error: {0}")]
    QrEncoding(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("No layout tokens for {0}")]
    MissingTokens(String),

    #[error("Invalid card size: {0}")]
    InvalidSize(#[from] SizeError),

    #[error("Invalid QR data: {0}")]
    InvalidPayload(#[from] PayloadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown card format: {0}")]
    UnknownFormat(String),

    #[error("Unknown card size: {0}")]
    UnknownSize(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid size specification: {0}")]
    InvalidSizeSpec(String),

    #[error("Invalid color specification: {0}")]
    InvalidColor(String),
}
