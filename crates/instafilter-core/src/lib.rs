//! Instafilter Core - filter selection and render pipeline
//!
//! This crate turns a filter choice plus a single intensity slider into a
//! rendered image. It provides the static filter catalog, the
//! intensity-to-parameter derivation, the [`FilterPipeline`] that owns the
//! editing state, and the boundary traits the surrounding app implements.
//!
//! # Usage
//!
//! ```ignore
//! use instafilter_core::{FilterPipeline, SoftwareEngine};
//!
//! let mut pipeline = FilterPipeline::new(SoftwareEngine);
//! pipeline.set_source_image(&std::fs::read("photo.jpg")?)?;
//! pipeline.select_filter("CIVignetteEffect")?;
//! pipeline.set_intensity(0.8)?;
//! let output = pipeline.output().unwrap();
//! ```

pub mod config;
pub mod decode;
pub mod encode;
pub mod engine;
pub mod error;
pub mod filter;
pub mod io;
pub mod pipeline;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, PipelineConfig};
pub use decode::{decode_image, DecodeError, DecodedImage};
pub use encode::{encode_jpeg, EncodeError};
pub use engine::{EngineError, ImageEngine, SoftwareEngine};
pub use error::PipelineError;
pub use filter::{derive_params, FilterParams, FilterSpec, ParamKind, Point, FILTERS};
pub use io::{ImageSink, ImageSource, JpegFileSink, SinkError};
pub use pipeline::{FilterPipeline, PipelineState};
pub use session::{Alert, FilterSession, UiShell};
