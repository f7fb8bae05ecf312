//! Grayscale reduction (ITU-R 601-2 luma).

use image::{GrayImage, ImageBuffer, Luma, Pixel};

/// Luminance of one pixel. Luma pixels pass through unchanged, alpha is ignored.
pub fn luminance<P: Pixel<Subpixel = u8>>(pixel: &P) -> u8 {
    match pixel.channels() {
        [r, g, b, ..] => {
            let l = 299 * *r as u32 + 587 * *g as u32 + 114 * *b as u32;
            ((l + 500) / 1000) as u8
        }
        [l, ..] => *l,
        [] => 0,
    }
}

pub fn grayscale<P: Pixel<Subpixel = u8>>(image: &ImageBuffer<P, Vec<u8>>) -> GrayImage {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        Luma([luminance(image.get_pixel(x, y))])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{LumaA, Rgb, RgbImage, Rgba};

    #[test]
    fn weights() {
        assert_eq!(luminance(&Rgb([255u8, 0, 0])), 76);
        assert_eq!(luminance(&Rgb([0u8, 255, 0])), 150);
        assert_eq!(luminance(&Rgb([0u8, 0, 255])), 29);
        assert_eq!(luminance(&Rgba([255u8, 255, 255, 0])), 255);
    }

    #[test]
    fn neutral_pixels_keep_their_value() {
        for v in 0..=255u8 {
            assert_eq!(luminance(&Rgb([v, v, v])), v);
            assert_eq!(luminance(&Luma([v])), v);
            assert_eq!(luminance(&LumaA([v, 7])), v);
        }
    }

    #[test]
    fn keeps_dimensions() {
        let img = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 80, 10]));
        let gray = grayscale(&img);
        assert_eq!(gray.dimensions(), (5, 3));
        assert_eq!(gray.get_pixel(4, 2).0[0], luminance(&Rgb([160u8, 160, 10])));
        assert_eq!(grayscale(&img), gray);
    }
}
