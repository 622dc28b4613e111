use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, space0},
    IResult,
};

use crate::error::ConfigError;
use crate::model::HexColor;

fn hex_digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 6, |c: char| c.is_ascii_hexdigit())(input)
}

/// Parse `#RRGGBB` or `#RGB`
fn hex_color(input: &str) -> IResult<&str, &str> {
    let (input, _) = space0(input)?;
    let (input, _) = char('#')(input)?;
    let (input, digits) = hex_digits(input)?;
    let (input, _) = space0(input)?;
    Ok((input, digits))
}

fn hex_value(digits: &str) -> u8 {
    digits.chars().fold(0u8, |acc, c| {
        let nibble = c.to_digit(16).unwrap_or(0) as u8;
        acc.wrapping_mul(16).wrapping_add(nibble)
    })
}

/// Parse a CSS-style hex color
pub fn parse_hex_color(spec: &str) -> Result<HexColor, ConfigError> {
    let invalid = || ConfigError::InvalidColor(spec.to_string());

    let digits = match hex_color(spec) {
        Ok(("", digits)) => digits,
        _ => return Err(invalid()),
    };

    match digits.len() {
        6 => Ok(HexColor {
            r: hex_value(&digits[0..2]),
            g: hex_value(&digits[2..4]),
            b: hex_value(&digits[4..6]),
        }),
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| hex_value(&digits[i..i + 1]) * 17;
            Ok(HexColor {
                r: expand(0),
                g: expand(1),
                b: expand(2),
            })
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_color() {
        let color = parse_hex_color("#FF8000").unwrap();
        assert_eq!(color, HexColor { r: 255, g: 128, b: 0 });
    }

    #[test]
    fn test_short_color_expands() {
        let color = parse_hex_color("#0a3").unwrap();
        assert_eq!(color, HexColor { r: 0x00, g: 0xaa, b: 0x33 });
    }

    #[test]
    fn test_rejects_bad_colors() {
        assert!(parse_hex_color("FF8000").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#1234567").is_err());
        assert!(parse_hex_color("#ggg").is_err());
    }
}
