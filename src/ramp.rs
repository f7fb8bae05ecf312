//! Character ramps ordered by visual density.

use crate::{AsciifyError, Result};
use std::fmt;
use std::str::FromStr;

/// Default ramp, densest glyph first
pub const HEAVY_TO_LIGHT: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// An ordered glyph sequence of at least two characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRamp {
    glyphs: Vec<char>,
}

impl CharRamp {
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(AsciifyError::DegenerateRamp(glyphs.len()));
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn reversed(&self) -> Self {
        Self { glyphs: self.glyphs.iter().rev().copied().collect() }
    }

    /// The ramp as-is, or reversed when `invert` is set.
    pub fn oriented(&self, invert: bool) -> Self {
        if invert {
            self.reversed()
        } else {
            self.clone()
        }
    }

    /// `floor(value / 255 * (len - 1))`, computed in integers.
    pub fn index_for(&self, value: u8) -> usize {
        let last = self.glyphs.len() - 1;
        (value as usize * last / 255).min(last)
    }

    pub fn glyph(&self, value: u8) -> char {
        self.glyphs[self.index_for(value)]
    }
}

impl Default for CharRamp {
    fn default() -> Self {
        Self { glyphs: HEAVY_TO_LIGHT.chars().collect() }
    }
}

impl FromStr for CharRamp {
    type Err = AsciifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for CharRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
