//! The image-processing capability the pipeline delegates pixel work to.
//!
//! [`ImageEngine`] is the seam: the pipeline hands it a source image, the
//! active filter and the derived parameters, and gets back a new image. The
//! pipeline is generic over the engine so tests can substitute a double and
//! hosts can plug in a GPU or platform backend.
//!
//! [`SoftwareEngine`] is the bundled CPU implementation of the built-in
//! catalog.

mod color;
mod distortion;
mod sample;
mod software;

use thiserror::Error;

use crate::decode::DecodedImage;
use crate::filter::{FilterParams, FilterSpec, ParamKind};

pub use software::SoftwareEngine;

/// Errors an engine reports when it cannot produce output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The engine has no implementation for the named filter.
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),

    /// A parameter value the engine cannot work with (NaN, infinite).
    #[error("Invalid value for {kind:?}: {value}")]
    InvalidParameter { kind: ParamKind, value: f32 },

    /// The output extent could not be computed from the input.
    #[error("Cannot compute output extent for a {width}x{height} image")]
    EmptyExtent { width: u32, height: u32 },
}

/// Opaque image-processing capability.
pub trait ImageEngine {
    /// Apply `filter` to `image` using only the values present in `params`.
    fn apply(
        &self,
        image: &DecodedImage,
        filter: &FilterSpec,
        params: &FilterParams,
    ) -> Result<DecodedImage, EngineError>;
}

impl<E: ImageEngine + ?Sized> ImageEngine for &E {
    fn apply(
        &self,
        image: &DecodedImage,
        filter: &FilterSpec,
        params: &FilterParams,
    ) -> Result<DecodedImage, EngineError> {
        (**self).apply(image, filter, params)
    }
}

impl<E: ImageEngine + ?Sized> ImageEngine for Box<E> {
    fn apply(
        &self,
        image: &DecodedImage,
        filter: &FilterSpec,
        params: &FilterParams,
    ) -> Result<DecodedImage, EngineError> {
        (**self).apply(image, filter, params)
    }
}
