//! The filter pipeline: selected filter, intensity, source image and the
//! cached render.
//!
//! # State
//!
//! ```text
//! Uninitialized --set_source--> Ready --render ok--> Rendered
//!                                 ^                     |
//!                                 +--- any change ------+
//! ```
//!
//! Every mutating operation re-renders immediately when a source image is
//! present, so from the caller's point of view the pipeline goes straight
//! back to `Rendered`. A failed render leaves it in `Ready` with the previous
//! output still cached.
//!
//! Failed lookups and decodes never touch state. All operations are
//! synchronous and run to completion.

use crate::config::PipelineConfig;
use crate::decode::{decode_image, DecodedImage};
use crate::engine::ImageEngine;
use crate::error::PipelineError;
use crate::filter::{
    clamp_intensity, derive_params, find_filter, FilterParams, FilterSpec, DEFAULT_FILTER,
    DEFAULT_INTENSITY, FILTERS,
};

/// Lifecycle state of a [`FilterPipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// No source image yet.
    Uninitialized,
    /// Source present; output is stale or absent.
    Ready,
    /// Output reflects the current source, filter and intensity.
    Rendered,
}

/// Owns the filter state and renders through an injected [`ImageEngine`].
pub struct FilterPipeline<E> {
    engine: E,
    catalog: &'static [FilterSpec],
    filter: &'static FilterSpec,
    intensity: f32,
    source: Option<DecodedImage>,
    output: Option<DecodedImage>,
    state: PipelineState,
}

impl<E: ImageEngine> FilterPipeline<E> {
    /// Create a pipeline over the built-in catalog, starting on `CISepiaTone`
    /// at the default intensity.
    pub fn new(engine: E) -> Self {
        Self::build(engine, FILTERS, DEFAULT_FILTER)
    }

    /// Create a pipeline over a custom catalog.
    ///
    /// Fails with [`PipelineError::UnknownFilter`] if `default_filter` is not in
    /// `catalog`.
    pub fn with_catalog(
        engine: E,
        catalog: &'static [FilterSpec],
        default_filter: &str,
    ) -> Result<Self, PipelineError> {
        let filter = find_filter(catalog, default_filter)
            .ok_or_else(|| PipelineError::UnknownFilter(default_filter.to_string()))?;
        Ok(Self::build(engine, catalog, filter))
    }

    /// Create a pipeline over the built-in catalog using configured defaults.
    ///
    /// Fails with [`PipelineError::Config`] if `config` does not validate.
    pub fn from_config(engine: E, config: &PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let mut pipeline = Self::with_catalog(engine, FILTERS, &config.default_filter)?;
        pipeline.intensity = config.default_intensity;
        Ok(pipeline)
    }

    fn build(engine: E, catalog: &'static [FilterSpec], filter: &'static FilterSpec) -> Self {
        Self {
            engine,
            catalog,
            filter,
            intensity: DEFAULT_INTENSITY,
            source: None,
            output: None,
            state: PipelineState::Uninitialized,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn catalog(&self) -> &'static [FilterSpec] {
        self.catalog
    }

    /// The active filter.
    pub fn filter(&self) -> &'static FilterSpec {
        self.filter
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn source(&self) -> Option<&DecodedImage> {
        self.source.as_ref()
    }

    /// The last successful render, if any.
    pub fn output(&self) -> Option<&DecodedImage> {
        self.output.as_ref()
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Parameters the next render would pass to the engine.
    pub fn current_params(&self) -> Option<FilterParams> {
        self.source
            .as_ref()
            .map(|source| derive_params(self.filter, self.intensity, (source.width, source.height)))
    }

    /// Switch to the filter named `name`, re-rendering if a source is set.
    pub fn select_filter(&mut self, name: &str) -> Result<(), PipelineError> {
        let Some(spec) = find_filter(self.catalog, name) else {
            log::warn!("Unknown filter requested: {}", name);
            return Err(PipelineError::UnknownFilter(name.to_string()));
        };

        log::debug!("Selected filter {}", spec.name);
        self.filter = spec;
        self.rerender()
    }

    /// Set the intensity, clamped into `[0, 1]`, re-rendering if a source is set.
    ///
    /// NaN is ignored.
    pub fn set_intensity(&mut self, value: f32) -> Result<(), PipelineError> {
        let Some(intensity) = clamp_intensity(value) else {
            log::warn!("Ignoring NaN intensity");
            return Ok(());
        };
        if intensity != value {
            log::debug!("Clamped intensity {} to {}", value, intensity);
        }

        self.intensity = intensity;
        self.rerender()
    }

    /// Decode `bytes` and make the result the new source image.
    pub fn set_source_image(&mut self, bytes: &[u8]) -> Result<(), PipelineError> {
        let image = decode_image(bytes).inspect_err(|e| {
            log::warn!("Rejected source image: {}", e);
        })?;
        self.set_source_decoded(image)
    }

    /// Make an already-decoded image the new source.
    pub fn set_source_decoded(&mut self, image: DecodedImage) -> Result<(), PipelineError> {
        image.validate()?;

        log::debug!("New source image {}x{}", image.width, image.height);
        self.source = Some(image);
        self.rerender()
    }

    /// Render the active filter over the source image.
    ///
    /// Returns `Ok(None)` without calling the engine when no source is set. On
    /// engine failure the previous output stays cached.
    pub fn render(&mut self) -> Result<Option<&DecodedImage>, PipelineError> {
        let Some(source) = self.source.as_ref() else {
            log::debug!("Render skipped: no source image");
            return Ok(None);
        };

        let params = derive_params(self.filter, self.intensity, (source.width, source.height));
        match self.engine.apply(source, self.filter, &params) {
            Ok(output) => {
                log::info!(
                    "Rendered {} at intensity {:.2} ({}x{})",
                    self.filter.name,
                    self.intensity,
                    output.width,
                    output.height
                );
                self.state = PipelineState::Rendered;
                Ok(Some(&*self.output.insert(output)))
            }
            Err(e) => {
                log::warn!("Render of {} failed: {}", self.filter.name, e);
                self.state = PipelineState::Ready;
                Err(e.into())
            }
        }
    }

    fn rerender(&mut self) -> Result<(), PipelineError> {
        if self.source.is_some() {
            self.state = PipelineState::Ready;
        }
        self.render().map(|_| ())
    }
}
