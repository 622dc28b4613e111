use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;

use feedback_card::cli::{proof_output_path, resolve_size, Args, Command, SizeArg};
use feedback_card::config::Settings;
use feedback_card::model::{CardDesign, CardFormat, CardSize, QrData};
use feedback_card::payload::validate_feedback_url;
use feedback_card::render::QrRenderer;
use feedback_card::render_proof;
use feedback_card::sizing::{
    convert_from_inches, custom_to_inches, physical_size, size_tokens, validate_custom_size,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args);
    if args.redirect_base.is_some() {
        validate_feedback_url(&settings.redirect_base)
            .with_context(|| format!("Invalid redirect base: {}", settings.redirect_base))?;
    }

    match &args.command {
        Command::Size {
            format,
            size,
            custom,
            ..
        } => print_size(*format, *size, custom.as_deref(), &settings),
        Command::Payload { input, svg, .. } => print_payload(input, svg.as_deref(), &settings),
        Command::Proof { input, output } => write_proof(input, output.as_deref(), &settings),
    }
}

/// Read a file, or stdin for "-"
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .with_context(|| "Failed to read stdin")?;
        return Ok(content);
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn print_size(
    format: CardFormat,
    size: SizeArg,
    custom: Option<&str>,
    settings: &Settings,
) -> Result<()> {
    let unit = settings.unit;
    let size = resolve_size(format, size, custom, unit)?;

    if let CardSize::Custom(custom) = &size {
        if let Err(e) = validate_custom_size(custom) {
            anyhow::bail!("{}", e);
        }
        log::info!("Custom size {} is {:?} inches", custom, custom_to_inches(custom));
    }

    let physical = physical_size(format, &size);
    let tokens = size_tokens(format, &size)
        .with_context(|| format!("No layout tokens for {} {}", format, size.name()))?;

    let report = serde_json::json!({
        "format": format.name(),
        "size": size.name(),
        "unit": unit.to_string(),
        "width": convert_from_inches(physical.width, unit),
        "height": convert_from_inches(physical.height, unit),
        "widthInches": physical.width,
        "heightInches": physical.height,
        "widthMm": physical.width_mm(),
        "heightMm": physical.height_mm(),
        "tokens": tokens,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn print_payload(input: &Path, svg: Option<&Path>, settings: &Settings) -> Result<()> {
    let content = read_input(input)?;
    let data: QrData =
        serde_json::from_str(&content).with_context(|| "Failed to parse QR data JSON")?;

    log::info!("Encoding {} QR data", data.qr_type());

    let payload = settings
        .payload_encoder()
        .encode(&data)
        .with_context(|| format!("Invalid {} QR data", data.qr_type()))?;

    if let Some(svg_path) = svg {
        let image = settings
            .svg_renderer()
            .render(&payload)
            .with_context(|| "Failed to render QR code")?;
        fs::write(svg_path, image)
            .with_context(|| format!("Failed to write SVG file: {}", svg_path.display()))?;
        log::info!("Wrote QR code to {}", svg_path.display());
    }

    println!("{}", payload);

    Ok(())
}

fn write_proof(input: &Path, output: Option<&Path>, settings: &Settings) -> Result<()> {
    let content = read_input(input)?;
    let design: CardDesign =
        serde_json::from_str(&content).with_context(|| "Failed to parse card design JSON")?;

    let pdf_data = render_proof(&design, settings).with_context(|| "Failed to generate proof PDF")?;

    let output_path = proof_output_path(input, output);
    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote proof to {}", output_path.display());

    Ok(())
}
