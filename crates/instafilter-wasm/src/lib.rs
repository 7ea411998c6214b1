//! Instafilter WASM - WebAssembly bindings for the Instafilter pipeline
//!
//! This crate exposes the instafilter-core pipeline to a browser page, which
//! acts as the screen: it picks images, forwards slider and menu events, and
//! paints the rendered output.
//!
//! # Module Structure
//!
//! - `pipeline` - `JsFilterPipeline` and the filter catalog
//! - `types` - WASM-compatible wrapper type for image data
//! - `encode` - JPEG encoding for saving output
//! - `logger` - routes core log records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsFilterPipeline, encode_jpeg_from_image } from '@instafilter/wasm';
//!
//! await init();
//! const pipeline = new JsFilterPipeline();
//! pipeline.set_source_image(bytes);
//! pipeline.select_filter('CITwirlDistortion');
//! const jpeg = encode_jpeg_from_image(pipeline.output(), 90);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod logger;
mod pipeline;
mod types;

pub use encode::encode_jpeg_from_image;
pub use pipeline::{filter_catalog, JsFilterPipeline};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
