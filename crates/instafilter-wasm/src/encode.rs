//! JPEG encoding bindings used to save rendered output from the browser.
//!
//! ```typescript
//! const jpeg = encode_jpeg_from_image(pipeline.output(), 90);
//! const writable = await fileHandle.createWritable();
//! await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//! await writable.close();
//! ```

use crate::types::JsDecodedImage;
use instafilter_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsDecodedImage to JPEG bytes (`quality` 1-100).
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_decoded(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_from_image_creates_valid_jpeg() {
        let img = JsDecodedImage::new(10, 10, vec![128u8; 10 * 10 * 3]);

        // JsValue errors only exist on wasm32, so go through the core path
        let jpeg = encode::encode_jpeg(&img.to_decoded(), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_from_image() {
        let img = JsDecodedImage::new(50, 50, vec![128u8; 50 * 50 * 3]);
        let jpeg = encode_jpeg_from_image(&img, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_empty_image_fails() {
        let img = JsDecodedImage::new(0, 0, vec![]);
        assert!(encode_jpeg_from_image(&img, 90).is_err());
    }
}
