//! Render parameters for one conversion.

use crate::{AsciifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 150;
pub const DEFAULT_VERTICAL_SCALE: f32 = 1.65;
pub const DEFAULT_CONTRAST: f32 = 1.5;
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

/// Immutable settings passed into [`crate::Converter`].
///
/// Every field has a default, so a JSON config may set any subset of them.
/// The ranges noted below are what an interactive front end should offer;
/// [`RenderParams::validate`] only rejects values the pipeline cannot use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Output width in characters (50-400)
    pub width: u32,
    /// Row count is divided by this to offset tall character cells
    pub vertical_scale: f32,
    /// 1.0 is neutral (0.5-3.0)
    pub contrast: f32,
    /// 1.0 is neutral (0.5-2.0)
    pub brightness: f32,
    /// Dark pixels get sparse glyphs, for dark backgrounds
    pub invert: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            vertical_scale: DEFAULT_VERTICAL_SCALE,
            contrast: DEFAULT_CONTRAST,
            brightness: DEFAULT_BRIGHTNESS,
            invert: true,
        }
    }
}

impl RenderParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_vertical_scale(mut self, scale: f32) -> Self {
        self.vertical_scale = scale;
        self
    }

    pub fn with_contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }

    pub fn with_brightness(mut self, factor: f32) -> Self {
        self.brightness = factor;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(AsciifyError::InvalidWidth);
        }
        if !self.vertical_scale.is_finite() || self.vertical_scale <= 0.0 {
            return Err(AsciifyError::InvalidParameter {
                name: "vertical_scale",
                value: self.vertical_scale,
            });
        }
        for (name, value) in [("contrast", self.contrast), ("brightness", self.brightness)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AsciifyError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let params = RenderParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.width, 150);
        assert_eq!(params.vertical_scale, 1.65);
        assert_eq!(params.contrast, 1.5);
        assert_eq!(params.brightness, 1.0);
        assert!(params.invert);
    }

    #[test]
    fn rejects_unusable_values() {
        let base = RenderParams::default();
        assert!(matches!(base.with_width(0).validate(), Err(AsciifyError::InvalidWidth)));
        assert!(base.with_vertical_scale(0.0).validate().is_err());
        assert!(base.with_vertical_scale(f32::NAN).validate().is_err());
        assert!(base.with_contrast(-0.5).validate().is_err());
        assert!(matches!(
            base.with_brightness(f32::INFINITY).validate(),
            Err(AsciifyError::InvalidParameter { name: "brightness", .. })
        ));
        // zero flattens the image but is still usable
        assert!(base.with_contrast(0.0).validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params = RenderParams::from_json_str(r#"{"width": 80, "invert": false}"#).unwrap();
        assert_eq!(params.width, 80);
        assert!(!params.invert);
        assert_eq!(params.contrast, DEFAULT_CONTRAST);
        assert_eq!(params.vertical_scale, DEFAULT_VERTICAL_SCALE);
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            RenderParams::from_json_str("{width: 80"),
            Err(AsciifyError::Config(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"contrast": 2.0, "brightness": 0.8}}"#).unwrap();
        let params = RenderParams::from_json_file(file.path()).unwrap();
        assert_eq!(params.contrast, 2.0);
        assert_eq!(params.brightness, 0.8);
        assert_eq!(params.width, DEFAULT_WIDTH);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            RenderParams::from_json_file(dir.path().join("nope.json")),
            Err(AsciifyError::Io(_))
        ));
    }
}
