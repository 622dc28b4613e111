use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Physical layout shape of a printed card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CardFormat {
    /// Folded 2:3 portrait card that stands on a table
    #[default]
    TableTent,
    /// 1:1 card
    Square,
    /// 2:3 portrait card carrying two QR codes
    DualQr,
}

impl CardFormat {
    pub fn all() -> [CardFormat; 3] {
        [CardFormat::TableTent, CardFormat::Square, CardFormat::DualQr]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardFormat::TableTent => "table-tent",
            CardFormat::Square => "square",
            CardFormat::DualQr => "dual-qr",
        }
    }

    /// Base width:height aspect ratio of the format
    pub fn aspect_ratio(&self) -> f64 {
        match self {
            CardFormat::TableTent | CardFormat::DualQr => 2.0 / 3.0,
            CardFormat::Square => 1.0,
        }
    }
}

impl fmt::Display for CardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "table-tent" | "tabletent" => Ok(CardFormat::TableTent),
            "square" => Ok(CardFormat::Square),
            "dual-qr" | "dualqr" => Ok(CardFormat::DualQr),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Length unit for user-entered custom sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inch,
    Mm,
    Px,
}

impl Unit {
    /// Suffix used when printing a value in this unit
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Inch => "\"",
            Unit::Mm => "mm",
            Unit::Px => "px",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Inch => f.write_str("inch"),
            Unit::Mm => f.write_str("mm"),
            Unit::Px => f.write_str("px"),
        }
    }
}

impl FromStr for Unit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" => Ok(Unit::Inch),
            "mm" => Ok(Unit::Mm),
            "px" => Ok(Unit::Px),
            _ => Err(ConfigError::UnknownUnit(s.to_string())),
        }
    }
}

/// User-entered card dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomSize {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: Unit,
}

impl CustomSize {
    pub fn new(width: f64, height: f64, unit: Unit) -> Self {
        Self {
            width,
            height,
            unit,
        }
    }
}

impl fmt::Display for CustomSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = self.unit.suffix();
        write!(f, "{}{} × {}{}", self.width, suffix, self.height, suffix)
    }
}

/// Size selection: a named preset or explicit dimensions
///
/// Deserializes from a preset name (`"large"`) or `{"custom": {...}}`;
/// names go through [`CardSize::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "CardSizeRepr")]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
    Custom(CustomSize),
}

/// Accepted JSON forms of a card size
#[derive(Deserialize)]
#[serde(untagged)]
enum CardSizeRepr {
    Name(String),
    Custom { custom: CustomSize },
}

impl TryFrom<CardSizeRepr> for CardSize {
    type Error = ConfigError;

    fn try_from(repr: CardSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            CardSizeRepr::Name(name) => CardSize::from_name(&name, None),
            CardSizeRepr::Custom { custom } => Ok(CardSize::Custom(custom)),
        }
    }
}

impl CardSize {
    /// Build a size from a preset name.
    ///
    /// `custom` without dimensions falls back to `Medium`.
    pub fn from_name(name: &str, custom: Option<CustomSize>) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(CardSize::Small),
            "medium" => Ok(CardSize::Medium),
            "large" => Ok(CardSize::Large),
            "custom" => match custom {
                Some(custom) => Ok(CardSize::Custom(custom)),
                None => {
                    log::warn!("Custom size selected without dimensions, using medium");
                    Ok(CardSize::Medium)
                }
            },
            _ => Err(ConfigError::UnknownSize(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardSize::Small => "small",
            CardSize::Medium => "medium",
            CardSize::Large => "large",
            CardSize::Custom(_) => "custom",
        }
    }
}

/// Physical card dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalSize {
    pub width: f64,
    pub height: f64,
}

impl PhysicalSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width in millimetres
    pub fn width_mm(&self) -> f64 {
        self.width * crate::config::defaults::MM_PER_INCH
    }

    /// Height in millimetres
    pub fn height_mm(&self) -> f64 {
        self.height * crate::config::defaults::MM_PER_INCH
    }
}
