//! Encoding of rendered output for saving.
//!
//! The pipeline keeps images as RGB8 buffers; sinks that persist a rendered
//! image go through [`encode_jpeg`] to produce file bytes.

mod jpeg;

pub use jpeg::{encode_jpeg, encode_jpeg_pixels, EncodeError, DEFAULT_JPEG_QUALITY};
