use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{one_of, space0},
    combinator::{opt, value},
    number::complete::double,
    IResult, Parser,
};

use crate::error::ConfigError;
use crate::model::{CustomSize, Unit};

/// Parse a unit suffix: in/inch/inches/", mm, px
fn unit(input: &str) -> IResult<&str, Unit> {
    alt((
        value(
            Unit::Inch,
            alt((
                tag_no_case("inches"),
                tag_no_case("inch"),
                tag_no_case("in"),
                tag("\""),
            )),
        ),
        value(Unit::Mm, tag_no_case("mm")),
        value(Unit::Px, tag_no_case("px")),
    ))
    .parse(input)
}

/// Parse `<width> x <height> [unit]`
fn size_spec(input: &str) -> IResult<&str, (f64, f64, Option<Unit>)> {
    let (input, _) = space0(input)?;
    let (input, width) = double(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = one_of("xX×")(input)?;
    let (input, _) = space0(input)?;
    let (input, height) = double(input)?;
    let (input, _) = space0(input)?;
    let (input, unit) = opt(unit).parse(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (width, height, unit)))
}

/// Parse a custom size such as `3x5in`, `90 x 140 mm` or `900x1500px`.
///
/// Without a unit suffix the dimensions are read in `default_unit`.
/// Range checks are left to `sizing::validate_custom_size`.
pub fn parse_custom_size(spec: &str, default_unit: Unit) -> Result<CustomSize, ConfigError> {
    match size_spec(spec) {
        Ok(("", (width, height, unit))) => Ok(CustomSize::new(
            width,
            height,
            unit.unwrap_or(default_unit),
        )),
        _ => Err(ConfigError::InvalidSizeSpec(spec.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        let size = parse_custom_size("3x5in", Unit::Mm).unwrap();
        assert_eq!(size, CustomSize::new(3.0, 5.0, Unit::Inch));
    }

    #[test]
    fn test_spaced_mm() {
        let size = parse_custom_size(" 90 x 140.5 mm ", Unit::Inch).unwrap();
        assert_eq!(size, CustomSize::new(90.0, 140.5, Unit::Mm));
    }

    #[test]
    fn test_default_unit() {
        let size = parse_custom_size("900X1500", Unit::Px).unwrap();
        assert_eq!(size, CustomSize::new(900.0, 1500.0, Unit::Px));
    }

    #[test]
    fn test_quote_suffix() {
        let size = parse_custom_size("4×6\"", Unit::Mm).unwrap();
        assert_eq!(size, CustomSize::new(4.0, 6.0, Unit::Inch));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_custom_size("3 by 5", Unit::Inch).is_err());
        assert!(parse_custom_size("3x5cm", Unit::Inch).is_err());
        assert!(parse_custom_size("", Unit::Inch).is_err());
    }
}
