//! WebAssembly bindings for asciify

use crate::{image_from_raw, CharRamp, Converter, RenderParams};
use wasm_bindgen::prelude::*;

fn js_err(e: crate::AsciifyError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmConverter {
    params: RenderParams,
    ramp: CharRamp,
}

#[wasm_bindgen]
impl WasmConverter {
    /// Create a converter with default parameters and ramp
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter { params: RenderParams::default(), ramp: CharRamp::default() }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.params.width = width;
    }

    #[wasm_bindgen]
    pub fn set_vertical_scale(&mut self, scale: f32) {
        self.params.vertical_scale = scale;
    }

    #[wasm_bindgen]
    pub fn set_contrast(&mut self, factor: f32) {
        self.params.contrast = factor;
    }

    #[wasm_bindgen]
    pub fn set_brightness(&mut self, factor: f32) {
        self.params.brightness = factor;
    }

    #[wasm_bindgen]
    pub fn set_invert(&mut self, enabled: bool) {
        self.params.invert = enabled;
    }

    /// Replace the ramp (densest glyph first)
    #[wasm_bindgen]
    pub fn set_ramp(&mut self, glyphs: &str) -> Result<(), JsValue> {
        self.ramp = CharRamp::new(glyphs).map_err(js_err)?;
        Ok(())
    }

    /// Convert RGBA canvas data.
    /// Returns `{ text, cols, rows, preview }`; `preview` is the grayscale
    /// buffer at the source resolution.
    #[wasm_bindgen]
    pub fn convert(&self, image_data: &[u8], width: u32, height: u32) -> Result<js_sys::Object, JsValue> {
        let image = image_from_raw(image_data.to_vec(), width, height, 4).map_err(js_err)?;
        let converter = Converter::new(self.params).map_err(js_err)?.with_ramp(self.ramp.clone());
        let conversion = converter.convert(&image).map_err(js_err)?;

        let result = js_sys::Object::new();
        js_sys::Reflect::set(&result, &"text".into(), &conversion.art.to_string().into())?;
        js_sys::Reflect::set(&result, &"cols".into(), &(conversion.art.width() as u32).into())?;
        js_sys::Reflect::set(&result, &"rows".into(), &(conversion.art.height() as u32).into())?;
        let preview = js_sys::Uint8Array::from(conversion.preview.as_raw().as_slice());
        js_sys::Reflect::set(&result, &"preview".into(), &preview)?;

        Ok(result)
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}
