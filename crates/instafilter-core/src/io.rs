//! Image acquisition and persistence boundaries.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::PipelineConfig;
use crate::decode::DecodedImage;
use crate::encode::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};

/// Supplies encoded source images, typically a media picker.
pub trait ImageSource {
    /// Let the user pick an image. `None` means the pick was cancelled.
    fn pick(&mut self) -> Option<Vec<u8>>;
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persists rendered images.
pub trait ImageSink {
    fn save(&mut self, image: &DecodedImage) -> Result<(), SinkError>;
}

/// Writes each saved image as a JPEG file at a fixed path.
#[derive(Debug, Clone)]
pub struct JpegFileSink {
    path: PathBuf,
    quality: u8,
}

impl JpegFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// A sink at `path` that encodes with the configured `jpeg_quality`.
    pub fn from_config(path: impl Into<PathBuf>, config: &PipelineConfig) -> Self {
        Self::new(path).with_quality(config.jpeg_quality)
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl ImageSink for JpegFileSink {
    fn save(&mut self, image: &DecodedImage) -> Result<(), SinkError> {
        let bytes = encode_jpeg(image, self.quality)?;
        fs::write(&self.path, &bytes)?;
        log::info!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}
