//! Derivation of filter parameters from a single intensity value.

use std::f32::consts::PI;

use serde::Serialize;

use super::{FilterSpec, ParamKind};

/// Intensity used before the user touches the slider.
pub const DEFAULT_INTENSITY: f32 = 0.5;

/// Radius in pixels at full intensity.
const RADIUS_PER_INTENSITY: f32 = 100.0;
/// Scale at full intensity.
const SCALE_PER_INTENSITY: f32 = 20.0;

/// Clamp a slider value into `[0, 1]`.
///
/// Out-of-range values snap to the nearest bound. NaN has no nearest bound and
/// yields `None`.
#[inline]
pub fn clamp_intensity(value: f32) -> Option<f32> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(0.0, 1.0))
    }
}

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Parameter values handed to the engine.
///
/// A field is `Some` only if the active filter accepts that kind.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FilterParams {
    pub intensity: Option<f32>,
    pub center: Option<Point>,
    pub radius: Option<f32>,
    pub angle: Option<f32>,
    pub scale: Option<f32>,
}

impl FilterParams {
    /// Check whether a value was derived for the given kind.
    pub fn is_set(&self, kind: ParamKind) -> bool {
        match kind {
            ParamKind::Intensity => self.intensity.is_some(),
            ParamKind::Center => self.center.is_some(),
            ParamKind::Radius => self.radius.is_some(),
            ParamKind::Angle => self.angle.is_some(),
            ParamKind::Scale => self.scale.is_some(),
        }
    }

    /// Iterate over the kinds that carry a value.
    pub fn set_kinds(&self) -> impl Iterator<Item = ParamKind> + '_ {
        ParamKind::ALL
            .into_iter()
            .filter(move |kind| self.is_set(*kind))
    }
}

/// Derive the parameters `spec` accepts for an image of the given size.
///
/// `intensity` is expected to be clamped already.
pub fn derive_params(
    spec: &FilterSpec,
    intensity: f32,
    (width, height): (u32, u32),
) -> FilterParams {
    let mut params = FilterParams::default();

    for &kind in spec.accepts {
        match kind {
            ParamKind::Intensity => params.intensity = Some(intensity),
            ParamKind::Center => {
                params.center = Some(Point::new(width as f32 / 2.0, height as f32 / 2.0))
            }
            ParamKind::Radius => params.radius = Some(intensity * RADIUS_PER_INTENSITY),
            ParamKind::Angle => params.angle = Some(intensity * PI),
            ParamKind::Scale => params.scale = Some(intensity * SCALE_PER_INTENSITY),
        }
    }

    params
}
