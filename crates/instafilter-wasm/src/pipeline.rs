//! Filter pipeline bindings.
//!
//! The browser page plays the screen: it forwards slider and menu events into
//! a `JsFilterPipeline` and paints whatever `output()` returns.
//!
//! ```typescript
//! import { JsFilterPipeline, filter_catalog } from '@instafilter/wasm';
//!
//! const pipeline = new JsFilterPipeline();
//! for (const spec of filter_catalog()) addMenuItem(spec.name);
//!
//! pipeline.set_source_image(new Uint8Array(await file.arrayBuffer()));
//! slider.oninput = () => {
//!     pipeline.set_intensity(slider.valueAsNumber);
//!     paint(pipeline.output());
//! };
//! ```

use crate::types::JsDecodedImage;
use instafilter_core::{FilterPipeline, PipelineError, PipelineState, SoftwareEngine, FILTERS};
use wasm_bindgen::prelude::*;

fn to_js_error(e: PipelineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The built-in filters with their accepted parameter kinds.
///
/// Returns an array of `{ name, accepts }` objects in menu order.
#[wasm_bindgen]
pub fn filter_catalog() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(FILTERS)?)
}

/// Filter state and rendering for one editing screen.
#[wasm_bindgen]
pub struct JsFilterPipeline {
    inner: FilterPipeline<SoftwareEngine>,
}

impl Default for JsFilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsFilterPipeline {
    /// Start on `CISepiaTone` at intensity 0.5 with no image.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: FilterPipeline::new(SoftwareEngine),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn filter_name(&self) -> String {
        self.inner.filter().name.to_string()
    }

    /// Screen title, e.g. "Filter: CISepiaTone".
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        format!("Filter: {}", self.inner.filter().name)
    }

    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> f32 {
        self.inner.intensity()
    }

    /// One of "uninitialized", "ready" or "rendered".
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.inner.state() {
            PipelineState::Uninitialized => "uninitialized",
            PipelineState::Ready => "ready",
            PipelineState::Rendered => "rendered",
        }
        .to_string()
    }

    pub fn select_filter(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.select_filter(name).map_err(to_js_error)
    }

    pub fn set_intensity(&mut self, value: f32) -> Result<(), JsValue> {
        self.inner.set_intensity(value).map_err(to_js_error)
    }

    /// Decode picked JPEG/PNG bytes and render them.
    pub fn set_source_image(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.set_source_image(bytes).map_err(to_js_error)
    }

    /// Force a render. Returns `undefined` when no image is loaded.
    pub fn render(&mut self) -> Result<Option<JsDecodedImage>, JsValue> {
        self.inner
            .render()
            .map(|output| output.map(JsDecodedImage::from_decoded))
            .map_err(to_js_error)
    }

    /// Names for the "Change Filter" menu, in catalog order.
    pub fn filter_names(&self) -> js_sys::Array {
        self.inner
            .catalog()
            .iter()
            .map(|spec| JsValue::from_str(spec.name))
            .collect()
    }

    /// The last successful render, if any.
    pub fn output(&self) -> Option<JsDecodedImage> {
        self.inner.output().map(JsDecodedImage::from_decoded)
    }
}
