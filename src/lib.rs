//! Image to ASCII art converter using brightness ramps.

pub mod enhance;
pub mod glyph;
pub mod gray;
pub mod params;
pub mod ramp;
pub mod resize;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use glyph::{GlyphMapper, TextArt};
pub use params::RenderParams;
pub use ramp::CharRamp;

use image::{DynamicImage, GrayImage, ImageBuffer};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsciifyError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Target width must be at least 1 character")]
    InvalidWidth,
    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("Character ramp needs at least 2 glyphs, got {0}")]
    DegenerateRamp(usize),
    #[error("Pixel buffer of {len} bytes does not match {width}x{height}x{channels}")]
    InvalidBuffer { len: usize, width: u32, height: u32, channels: u8 },
    #[error("Output grid of {cols}x{rows} exceeds {max} cells")]
    GridTooLarge { cols: u32, rows: f64, max: u64 },
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u8),
}

pub type Result<T> = std::result::Result<T, AsciifyError>;

/// Output of a single conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Full-size grayscale of the enhanced image
    pub preview: GrayImage,
    pub art: TextArt,
}

/// Main converter: enhance, resize, grayscale, then map to glyphs
#[derive(Debug, Clone)]
pub struct Converter {
    params: RenderParams,
    ramp: CharRamp,
}

impl Converter {
    pub fn new(params: RenderParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, ramp: CharRamp::default() })
    }

    /// Replace the heavy-to-light ramp. Inversion is applied on top of it.
    pub fn with_ramp(mut self, ramp: CharRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn ramp(&self) -> &CharRamp {
        &self.ramp
    }

    pub fn convert(&self, image: &DynamicImage) -> Result<Conversion> {
        let (img_w, img_h) = (image.width(), image.height());
        if img_w == 0 || img_h == 0 {
            return Err(AsciifyError::InvalidDimensions { width: img_w, height: img_h });
        }

        let p = &self.params;
        let enhanced = enhance::enhance(&image.to_rgb8(), p.contrast, p.brightness);
        debug!(
            "enhanced {}x{} image (contrast {}, brightness {})",
            img_w, img_h, p.contrast, p.brightness
        );
        let preview = gray::grayscale(&enhanced);

        let resized = resize::resize(&enhanced, p.width, p.vertical_scale)?;
        debug!("resized to {}x{} cells", resized.width(), resized.height());

        let luma = gray::grayscale(&resized);
        let mapper = GlyphMapper::new(self.ramp.oriented(p.invert));
        let art = mapper.map(&luma)?;

        Ok(Conversion { preview, art })
    }
}

/// Build an image from an interleaved 8-bit buffer with 1-4 channels.
pub fn image_from_raw(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(AsciifyError::InvalidDimensions { width, height });
    }
    let len = data.len();
    let mismatch = || AsciifyError::InvalidBuffer { len, width, height, channels };
    if !(1..=4).contains(&channels) {
        return Err(AsciifyError::UnsupportedChannels(channels));
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or_else(mismatch)?;
    if len != expected {
        return Err(mismatch());
    }

    let image = match channels {
        1 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        _ => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
    };
    image.ok_or_else(mismatch)
}
