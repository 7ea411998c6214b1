//! Test doubles shared by the unit tests.

use std::cell::{Cell, RefCell};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::decode::DecodedImage;
use crate::engine::{EngineError, ImageEngine};
use crate::filter::{FilterParams, FilterSpec};

/// Engine double that records every call and can be told to fail.
///
/// Output is the source with its first byte replaced by the call number, so
/// consecutive renders are distinguishable.
#[derive(Default)]
pub(crate) struct RecordingEngine {
    pub calls: RefCell<Vec<(String, FilterParams)>>,
    pub fail: Cell<bool>,
}

impl RecordingEngine {
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<(String, FilterParams)> {
        self.calls.borrow().last().cloned()
    }
}

impl ImageEngine for RecordingEngine {
    fn apply(
        &self,
        image: &DecodedImage,
        filter: &FilterSpec,
        params: &FilterParams,
    ) -> Result<DecodedImage, EngineError> {
        self.calls
            .borrow_mut()
            .push((filter.name.to_string(), *params));

        if self.fail.get() {
            return Err(EngineError::EmptyExtent {
                width: image.width,
                height: image.height,
            });
        }

        let mut output = image.clone();
        output.pixels[0] = self.call_count() as u8;
        Ok(output)
    }
}

/// Route `log` output through the test harness; safe to call repeatedly.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn solid_image(width: u32, height: u32, value: u8) -> DecodedImage {
    DecodedImage::new(width, height, vec![value; (width * height * 3) as usize])
}

pub(crate) fn png_bytes(width: u32, height: u32, value: u8) -> Vec<u8> {
    let image = solid_image(width, height, value);
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(&image.pixels, width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}
