//! asciify CLI - Convert images to ASCII art

use asciify::{AsciifyError, CharRamp, Converter, RenderParams};
use clap::{ArgAction, Parser};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asciify", about = "Convert images to ASCII art")]
struct Args {
    /// Input image file
    input: PathBuf,
    /// Output width in characters
    #[arg(short, long)]
    width: Option<u32>,
    /// Divides the row count to offset tall character cells
    #[arg(short, long)]
    vertical_scale: Option<f32>,
    /// Contrast factor (1.0 = unchanged)
    #[arg(short, long)]
    contrast: Option<f32>,
    /// Brightness factor (1.0 = unchanged)
    #[arg(short, long)]
    brightness: Option<f32>,
    /// Sparse glyphs for dark pixels, for dark backgrounds (default: true)
    #[arg(short, long, action = ArgAction::Set)]
    invert: Option<bool>,
    /// Character ramp, densest glyph first
    #[arg(short, long)]
    ramp: Option<String>,
    /// JSON file with render parameters; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Save the enhanced grayscale preview to this file
    #[arg(short, long)]
    preview: Option<PathBuf>,
    /// Write the text art here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn params(&self) -> Result<RenderParams, AsciifyError> {
        let mut params = match &self.config {
            Some(path) => RenderParams::from_json_file(path)?,
            None => RenderParams::default(),
        };
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(scale) = self.vertical_scale {
            params.vertical_scale = scale;
        }
        if let Some(contrast) = self.contrast {
            params.contrast = contrast;
        }
        if let Some(brightness) = self.brightness {
            params.brightness = brightness;
        }
        if let Some(invert) = self.invert {
            params.invert = invert;
        }
        Ok(params)
    }
}

fn main() -> Result<(), AsciifyError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let params = args.params()?;
    let mut converter = Converter::new(params)?;
    if let Some(ramp) = &args.ramp {
        converter = converter.with_ramp(ramp.parse::<CharRamp>()?);
    }

    let image = image::open(&args.input)?;
    info!("loaded {} ({}x{})", args.input.display(), image.width(), image.height());

    let result = converter.convert(&image)?;

    if let Some(path) = &args.preview {
        result.preview.save(path)?;
        info!("saved preview to {}", path.display());
    }

    match &args.output {
        Some(path) => std::fs::write(path, result.art.to_string() + "\n")?,
        None => println!("{}", result.art),
    }
    Ok(())
}
