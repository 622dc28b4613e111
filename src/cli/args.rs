use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::model::{CardFormat, CardSize, HexColor, Unit};
use crate::parser::parse_custom_size;
use crate::sizing::default_custom_size;

#[derive(Parser, Debug)]
#[command(name = "feedback-card")]
#[command(
    author,
    version,
    about = "Size QR feedback cards for print and encode their QR payloads"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the redirect service for multi-device QR codes
    #[arg(long, global = true)]
    pub redirect_base: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the physical size and layout tokens of a card
    Size {
        /// Card format
        #[arg(short, long, value_enum, default_value = "table-tent")]
        format: CardFormat,

        /// Size preset
        #[arg(short, long, value_enum, default_value = "medium")]
        size: SizeArg,

        /// Custom dimensions, e.g. "3x5in" or "100x150mm" (implies --size custom)
        #[arg(long)]
        custom: Option<String>,

        /// Unit for custom dimensions given without one, and for the reported size
        #[arg(short, long, value_enum, default_value = "inch")]
        unit: Unit,
    },

    /// Validate a QR data record (JSON) and print its payload
    Payload {
        /// QR data JSON file, or "-" for stdin
        input: PathBuf,

        /// Also write the QR code as SVG
        #[arg(long)]
        svg: Option<PathBuf>,

        /// SVG module color
        #[arg(long)]
        dark: Option<HexColor>,

        /// SVG background color
        #[arg(long)]
        light: Option<HexColor>,
    },

    /// Render a card design (JSON) to a physical-size PDF proof
    Proof {
        /// Card design JSON file
        input: PathBuf,

        /// Output PDF file path (defaults to input with .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Size choice on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum SizeArg {
    Small,
    #[default]
    Medium,
    Large,
    Custom,
}

impl SizeArg {
    pub fn name(&self) -> &'static str {
        match self {
            SizeArg::Small => "small",
            SizeArg::Medium => "medium",
            SizeArg::Large => "large",
            SizeArg::Custom => "custom",
        }
    }
}

/// Resolve `--size`/`--custom` into a card size.
///
/// `--size custom` without dimensions uses the format's default custom size.
pub fn resolve_size(
    format: CardFormat,
    size: SizeArg,
    custom: Option<&str>,
    unit: Unit,
) -> Result<CardSize, ConfigError> {
    let custom = match custom {
        Some(spec) => {
            if !matches!(size, SizeArg::Custom | SizeArg::Medium) {
                log::warn!("--custom given, ignoring --size {}", size.name());
            }
            Some(parse_custom_size(spec, unit)?)
        }
        None if size == SizeArg::Custom => Some(default_custom_size(format, unit)),
        None => None,
    };

    let name = if custom.is_some() { "custom" } else { size.name() };
    CardSize::from_name(name, custom)
}

/// Output path for a proof: explicit, or the input with a .pdf extension
pub fn proof_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomSize;

    #[test]
    fn test_resolve_presets() {
        let size = resolve_size(CardFormat::Square, SizeArg::Large, None, Unit::Inch).unwrap();
        assert_eq!(size, CardSize::Large);
    }

    #[test]
    fn test_resolve_custom_default() {
        let size = resolve_size(CardFormat::DualQr, SizeArg::Custom, None, Unit::Inch).unwrap();
        assert_eq!(size, CardSize::Custom(CustomSize::new(4.0, 6.0, Unit::Inch)));
    }

    #[test]
    fn test_resolve_custom_spec_uses_unit() {
        let size =
            resolve_size(CardFormat::TableTent, SizeArg::Custom, Some("100x150"), Unit::Mm)
                .unwrap();
        assert_eq!(size, CardSize::Custom(CustomSize::new(100.0, 150.0, Unit::Mm)));

        let bad = resolve_size(CardFormat::TableTent, SizeArg::Custom, Some("big"), Unit::Mm);
        assert!(matches!(bad, Err(ConfigError::InvalidSizeSpec(_))));
    }

    #[test]
    fn test_parse_size_command() {
        let args = Args::try_parse_from([
            "feedback-card",
            "-vv",
            "size",
            "--format",
            "dual-qr",
            "--size",
            "custom",
            "--unit",
            "mm",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Size {
                format, size, unit, ..
            } => {
                assert_eq!(format, CardFormat::DualQr);
                assert_eq!(size, SizeArg::Custom);
                assert_eq!(unit, Unit::Mm);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_payload_colors() {
        let args = Args::try_parse_from([
            "feedback-card",
            "payload",
            "wifi.json",
            "--dark",
            "#123",
            "--redirect-base",
            "https://go.example.com",
        ])
        .unwrap();
        assert_eq!(args.redirect_base.as_deref(), Some("https://go.example.com"));
        match args.command {
            Command::Payload { dark, light, .. } => {
                assert_eq!(
                    dark,
                    Some(HexColor {
                        r: 0x11,
                        g: 0x22,
                        b: 0x33
                    })
                );
                assert_eq!(light, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_color_rejected() {
        let result = Args::try_parse_from(["feedback-card", "payload", "x.json", "--dark", "red"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_proof_output_path() {
        let input = Path::new("cards/cafe.json");
        assert_eq!(
            proof_output_path(input, None),
            PathBuf::from("cards/cafe.pdf")
        );
        assert_eq!(
            proof_output_path(input, Some(Path::new("out.pdf"))),
            PathBuf::from("out.pdf")
        );
    }
}
