//! Aeroforge - terminal generator for Frutiger Aero button stylesheets
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

use aeroforge_app::config::{self, Settings};
use aeroforge_core::prelude::*;
use aeroforge_core::{
    wrap_hue, ButtonParams, ButtonSize, GeneratedOutput, Glow, HuePreset, HueSelection, Saturation,
};

/// Aeroforge - terminal generator for Frutiger Aero button stylesheets
#[derive(Parser, Debug)]
#[command(name = "aeroforge")]
#[command(about = "Interactive generator for Frutiger Aero button stylesheets", long_about = None)]
struct Args {
    /// Print the generated stylesheet to stdout and exit (no TUI)
    #[arg(long)]
    print: bool,

    /// Print the markup snippet to stdout and exit (no TUI)
    #[arg(long)]
    markup: bool,

    /// Button text
    #[arg(long)]
    text: Option<String>,

    /// Size category: small, medium, large
    #[arg(long)]
    size: Option<ButtonSize>,

    /// Hue: preset name (blue, green, ...) or degrees
    #[arg(long)]
    hue: Option<String>,

    /// Color saturation, 0.02 to 0.6 (snapped to steps of 0.02)
    #[arg(long)]
    saturation: Option<f64>,

    /// Bottom glow intensity, 0.3 to 1.0 (snapped to steps of 0.05)
    #[arg(long)]
    glow: Option<f64>,
}

/// Build parameters from config defaults with CLI overrides on top
fn build_params(args: &Args, settings: &Settings) -> Result<ButtonParams> {
    let mut params = ButtonParams {
        text: settings.defaults.text.clone(),
        size: settings.defaults.size,
        ..ButtonParams::default()
    };
    if let Ok(hue) = parse_hue(&settings.defaults.hue) {
        params.hue = hue;
    }

    if let Some(text) = &args.text {
        params.text = text.clone();
    }
    if let Some(size) = args.size {
        params.size = size;
    }
    if let Some(hue) = &args.hue {
        params.hue = parse_hue(hue)?;
    }
    if let Some(saturation) = args.saturation {
        params.saturation = Saturation::from_value(saturation);
    }
    if let Some(glow) = args.glow {
        params.glow = Glow::from_value(glow);
    }
    Ok(params)
}

/// Parse a hue argument: preset name first, then degrees
fn parse_hue(value: &str) -> Result<HueSelection> {
    if let Ok(preset) = value.parse::<HuePreset>() {
        return Ok(HueSelection::Preset(preset));
    }
    if let Ok(degrees) = value.parse::<i32>() {
        return Ok(HueSelection::Custom(wrap_hue(degrees)));
    }
    Err(Error::invalid_parameter(format!(
        "Unknown hue '{value}': expected a preset name or degrees"
    )))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = config::load_settings();

    // Print modes: no TUI, no log file
    if args.print || args.markup {
        let params = build_params(&args, &settings)?;
        let output = GeneratedOutput::from_params(&params);
        if args.markup {
            println!("{}", output.markup);
        }
        if args.print {
            println!("{}", output.css);
        }
        return Ok(());
    }

    aeroforge_core::logging::init()?;

    // CLI overrides seed the initial TUI state through the defaults
    if let Some(text) = args.text {
        settings.defaults.text = text;
    }
    if let Some(size) = args.size {
        settings.defaults.size = size;
    }
    if let Some(hue) = args.hue {
        // Validate eagerly so a typo fails fast instead of silently
        // falling back inside the TUI.
        parse_hue(&hue)?;
        settings.defaults.hue = hue;
    }
    if args.saturation.is_some() || args.glow.is_some() {
        warn!("--saturation and --glow only apply with --print/--markup");
    }

    aeroforge_tui::run(settings).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["aeroforge"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_build_params_defaults() {
        let params = build_params(&args(&["--print"]), &Settings::default()).expect("params");
        assert_eq!(params.text, "Accept");
        assert_eq!(params.size, ButtonSize::Large);
        assert_eq!(params.hue, HueSelection::Preset(HuePreset::Green));
    }

    #[test]
    fn test_build_params_overrides() {
        let params = build_params(
            &args(&[
                "--print",
                "--text",
                "Download",
                "--size",
                "small",
                "--hue",
                "217",
                "--saturation",
                "0.3",
                "--glow",
                "0.5",
            ]),
            &Settings::default(),
        )
        .expect("params");
        assert_eq!(params.text, "Download");
        assert_eq!(params.size, ButtonSize::Small);
        assert_eq!(params.hue, HueSelection::Custom(217));
        assert_eq!(params.saturation.css(), "0.3");
        assert_eq!(params.glow.css(), "0.5");
    }

    #[test]
    fn test_parse_hue_rejects_garbage() {
        assert!(parse_hue("sparkly").is_err());
        assert_eq!(
            parse_hue("teal").expect("preset"),
            HueSelection::Preset(HuePreset::Teal)
        );
        assert_eq!(parse_hue("-20").expect("degrees"), HueSelection::Custom(340));
    }
}
