//! Brightness to glyph mapping.

use crate::{AsciifyError, CharRamp, Result};
use image::GrayImage;
use std::fmt;

/// Rows of equal length, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArt {
    rows: Vec<String>,
    width: usize,
}

impl TextArt {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Characters per row
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Rows joined with `\n`, no trailing newline.
impl fmt::Display for TextArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

pub struct GlyphMapper {
    ramp: CharRamp,
}

impl GlyphMapper {
    /// `ramp` is used in the given orientation; lowest luminance picks its first glyph.
    pub fn new(ramp: CharRamp) -> Self {
        Self { ramp }
    }

    pub fn ramp(&self) -> &CharRamp {
        &self.ramp
    }

    pub fn map(&self, image: &GrayImage) -> Result<TextArt> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Err(AsciifyError::InvalidDimensions { width: w, height: h });
        }

        let glyphs: Vec<char> = image.pixels().map(|p| self.ramp.glyph(p.0[0])).collect();
        let rows = glyphs.chunks(w as usize).map(|row| row.iter().collect()).collect();
        Ok(TextArt { rows, width: w as usize })
    }
}
