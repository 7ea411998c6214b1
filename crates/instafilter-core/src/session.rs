//! Wiring between the pipeline and the screen that drives it.
//!
//! A [`FilterSession`] turns user events into pipeline calls and pushes the
//! results back out. Collaborators are passed to each call rather than held,
//! so the same session can be driven by different pickers, sinks or shells.
//! Every failure is shown to the user as an [`Alert`]; nothing is retried.

use crate::decode::DecodedImage;
use crate::engine::ImageEngine;
use crate::error::PipelineError;
use crate::io::{ImageSink, ImageSource};
use crate::pipeline::{FilterPipeline, PipelineState};

/// A titled message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn from_error(error: &PipelineError) -> Self {
        Self::new(error.title(), error.to_string())
    }

    fn saved() -> Self {
        Self::new(
            "Saving successful",
            "Your altered image has been saved to your photo album",
        )
    }
}

/// The presentation side of the screen.
pub trait UiShell {
    fn show_title(&mut self, title: &str);
    fn show_image(&mut self, image: &DecodedImage);
    fn show_alert(&mut self, alert: &Alert);
}

/// Screen-level controller over a [`FilterPipeline`].
pub struct FilterSession<E> {
    pipeline: FilterPipeline<E>,
}

impl<E: ImageEngine> FilterSession<E> {
    /// Start a session and show the initial filter title.
    pub fn new(pipeline: FilterPipeline<E>, shell: &mut dyn UiShell) -> Self {
        let session = Self { pipeline };
        session.show_title(shell);
        session
    }

    pub fn pipeline(&self) -> &FilterPipeline<E> {
        &self.pipeline
    }

    /// Filter names for the "Change Filter" menu, in catalog order.
    pub fn filter_names(&self) -> impl Iterator<Item = &'static str> {
        self.pipeline.catalog().iter().map(|spec| spec.name)
    }

    /// Pick a new source image. Cancelling leaves everything as it was.
    pub fn choose_image(&mut self, source: &mut dyn ImageSource, shell: &mut dyn UiShell) {
        let Some(bytes) = source.pick() else {
            log::debug!("Image pick cancelled");
            return;
        };
        let result = self.pipeline.set_source_image(&bytes);
        self.present(result, shell);
    }

    /// Switch filters from the menu.
    pub fn choose_filter(&mut self, name: &str, shell: &mut dyn UiShell) {
        let result = self.pipeline.select_filter(name);
        if !matches!(result, Err(PipelineError::UnknownFilter(_))) {
            self.show_title(shell);
        }
        self.present(result, shell);
    }

    /// Slider moved.
    pub fn intensity_changed(&mut self, value: f32, shell: &mut dyn UiShell) {
        let result = self.pipeline.set_intensity(value);
        self.present(result, shell);
    }

    /// Save the current output through `sink` and report the outcome.
    pub fn save(&self, sink: &mut dyn ImageSink, shell: &mut dyn UiShell) {
        let result = match self.pipeline.output() {
            Some(output) => sink.save(output).map_err(PipelineError::from),
            None => Err(PipelineError::NothingToSave),
        };

        match result {
            Ok(()) => {
                log::info!("Saved {} render", self.pipeline.filter().name);
                shell.show_alert(&Alert::saved());
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                shell.show_alert(&Alert::from_error(&e));
            }
        }
    }

    fn show_title(&self, shell: &mut dyn UiShell) {
        shell.show_title(&format!("Filter: {}", self.pipeline.filter().name));
    }

    fn present(&self, result: Result<(), PipelineError>, shell: &mut dyn UiShell) {
        match result {
            Ok(()) => {
                if self.pipeline.state() == PipelineState::Rendered {
                    if let Some(output) = self.pipeline.output() {
                        shell.show_image(output);
                    }
                }
            }
            Err(e) => shell.show_alert(&Alert::from_error(&e)),
        }
    }
}
