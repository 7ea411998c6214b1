//! Source image decoding for the filter pipeline.
//!
//! Picked images arrive as encoded bytes (JPEG or PNG). This module turns them
//! into the pipeline's working representation: an RGB8 buffer with EXIF
//! orientation already applied, so that the derived center point matches what
//! the user sees.
//!
//! # Examples
//!
//! ```ignore
//! use instafilter_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::decode_image;
pub use types::{DecodeError, DecodedImage};

use types::Orientation;
