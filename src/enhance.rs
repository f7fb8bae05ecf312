//! Contrast and brightness adjustment.
//!
//! Both operations blend each colour channel against a reference level:
//! `out = reference + factor * (in - reference)`. Contrast uses the image's
//! mean luminance as reference, brightness uses black. A factor of 1.0
//! returns the input unchanged, 0.0 returns the flat reference image.
//! Alpha channels are left untouched.

use crate::gray::luminance;
use image::{ImageBuffer, Pixel};

type Buffer<P> = ImageBuffer<P, Vec<u8>>;

/// Contrast first, then brightness on the result.
pub fn enhance<P: Pixel<Subpixel = u8>>(image: &Buffer<P>, contrast: f32, brightness: f32) -> Buffer<P> {
    let contrasted = self::contrast(image, contrast);
    self::brightness(&contrasted, brightness)
}

pub fn contrast<P: Pixel<Subpixel = u8>>(image: &Buffer<P>, factor: f32) -> Buffer<P> {
    blend(image, mean_luminance(image), factor)
}

pub fn brightness<P: Pixel<Subpixel = u8>>(image: &Buffer<P>, factor: f32) -> Buffer<P> {
    blend(image, 0.0, factor)
}

/// Mean luminance rounded to the nearest level
fn mean_luminance<P: Pixel<Subpixel = u8>>(image: &Buffer<P>) -> f32 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = image.pixels().map(|p| luminance(p) as u64).sum();
    ((sum + count / 2) / count) as f32
}

fn blend<P: Pixel<Subpixel = u8>>(image: &Buffer<P>, reference: f32, factor: f32) -> Buffer<P> {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.apply_without_alpha(|c| {
            (reference + factor * (c as f32 - reference)).round().clamp(0.0, 255.0) as u8
        });
    }
    out
}
