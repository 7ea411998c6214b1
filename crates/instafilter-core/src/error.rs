//! Error taxonomy surfaced by the pipeline and session.

use thiserror::Error;

use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::engine::EngineError;
use crate::io::SinkError;

/// Every error here is recoverable: the session reports it and carries on.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The requested filter identifier is not in the catalog.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The source image could not be decoded into the working representation.
    #[error("Invalid source image: {0}")]
    InvalidImage(#[from] DecodeError),

    /// The engine could not produce output for the current inputs.
    #[error("Render failed: {0}")]
    Render(#[from] EngineError),

    /// Persisting the rendered image failed.
    #[error("Save failed: {0}")]
    Io(#[from] SinkError),

    /// The configuration handed to the pipeline is not usable.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Save was requested before anything was rendered.
    #[error("No rendered image to save")]
    NothingToSave,
}

impl PipelineError {
    /// Short user-facing heading for this kind of failure.
    pub fn title(&self) -> &'static str {
        match self {
            PipelineError::UnknownFilter(_) => "Unknown Filter",
            PipelineError::InvalidImage(_) => "Invalid Image",
            PipelineError::Render(_) => "Filter Failed",
            PipelineError::Config(_) => "Invalid Configuration",
            PipelineError::Io(_) | PipelineError::NothingToSave => "Failed in Saving",
        }
    }
}
