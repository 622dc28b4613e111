use crate::config::defaults::{INCH_DECIMALS, MM_DECIMALS, MM_PER_INCH, PRINT_DPI, PX_DECIMALS};
use crate::model::{CustomSize, PhysicalSize, Unit};

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert a length in `unit` to inches (exact, unrounded)
pub fn convert_to_inches(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Inch => value,
        Unit::Mm => value / MM_PER_INCH,
        Unit::Px => value / PRINT_DPI,
    }
}

/// Convert inches to `unit`, rounded for display:
/// inches to 2 decimals, millimetres to 1, pixels to whole numbers
pub fn convert_from_inches(inches: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Inch => round_to(inches, INCH_DECIMALS),
        Unit::Mm => round_to(inches * MM_PER_INCH, MM_DECIMALS),
        Unit::Px => round_to(inches * PRINT_DPI, PX_DECIMALS),
    }
}

/// Both dimensions of a custom size in inches
pub fn custom_to_inches(size: &CustomSize) -> PhysicalSize {
    PhysicalSize::new(
        convert_to_inches(size.width, size.unit),
        convert_to_inches(size.height, size.unit),
    )
}

/// Express a physical size in `unit`, rounded per unit
pub fn physical_to_custom(size: PhysicalSize, unit: Unit) -> CustomSize {
    CustomSize::new(
        convert_from_inches(size.width, unit),
        convert_from_inches(size.height, unit),
        unit,
    )
}

/// Format an inch length in `unit` with its suffix, e.g. `2"`, `50.8mm`, `600px`
pub fn format_length(inches: f64, unit: Unit) -> String {
    format!("{}{}", convert_from_inches(inches, unit), unit.suffix())
}
