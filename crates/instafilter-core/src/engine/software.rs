//! CPU implementation of the built-in filter catalog.

use std::f32::consts::PI;

use super::{color, distortion, EngineError, ImageEngine};
use crate::decode::DecodedImage;
use crate::filter::{FilterParams, FilterSpec, ParamKind, Point};

/// Renders the built-in filters on RGB8 buffers.
///
/// Parameters the caller leaves unset fall back to the engine's own defaults,
/// so a filter applied with an empty parameter set still renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareEngine;

impl SoftwareEngine {
    pub fn new() -> Self {
        Self
    }

    /// Names of the filters this engine can render.
    pub fn supported_filters() -> &'static [&'static str] {
        &[
            "CISepiaTone",
            "CIVignetteEffect",
            "CIPhotoEffectInstant",
            "CIPhotoEffectProcess",
            "CITwirlDistortion",
            "CIBumpDistortion",
            "CICircleSplashDistortion",
            "CIBloom",
        ]
    }
}

impl ImageEngine for SoftwareEngine {
    fn apply(
        &self,
        image: &DecodedImage,
        filter: &FilterSpec,
        params: &FilterParams,
    ) -> Result<DecodedImage, EngineError> {
        if image.validate().is_err() {
            return Err(EngineError::EmptyExtent {
                width: image.width,
                height: image.height,
            });
        }
        check_finite(params)?;

        let (cx, cy) = image.center();
        let center = params.center.unwrap_or(Point::new(cx, cy));

        let output = match filter.name {
            "CISepiaTone" => color::sepia_tone(image, params.intensity.unwrap_or(1.0)),
            "CIVignetteEffect" => color::vignette(
                image,
                center,
                params.intensity.unwrap_or(1.0),
                params.radius.unwrap_or(150.0),
            ),
            "CIPhotoEffectInstant" => color::photo_effect_instant(image),
            "CIPhotoEffectProcess" => color::photo_effect_process(image),
            "CITwirlDistortion" => distortion::twirl(
                image,
                center,
                params.radius.unwrap_or(300.0),
                params.angle.unwrap_or(PI),
            ),
            "CIBumpDistortion" => distortion::bump(
                image,
                center,
                params.radius.unwrap_or(300.0),
                params.scale.unwrap_or(0.5),
            ),
            "CICircleSplashDistortion" => {
                distortion::circle_splash(image, center, params.radius.unwrap_or(150.0))
            }
            "CIBloom" => color::bloom(
                image,
                params.radius.unwrap_or(10.0),
                params.intensity.unwrap_or(0.5),
            ),
            other => return Err(EngineError::UnsupportedFilter(other.to_string())),
        };

        Ok(output)
    }
}

fn check_finite(params: &FilterParams) -> Result<(), EngineError> {
    let scalars = [
        (ParamKind::Intensity, params.intensity),
        (ParamKind::Radius, params.radius),
        (ParamKind::Angle, params.angle),
        (ParamKind::Scale, params.scale),
    ];
    for (kind, value) in scalars {
        if let Some(value) = value.filter(|v| !v.is_finite()) {
            return Err(EngineError::InvalidParameter { kind, value });
        }
    }

    if let Some(center) = params.center {
        for value in [center.x, center.y] {
            if !value.is_finite() {
                return Err(EngineError::InvalidParameter {
                    kind: ParamKind::Center,
                    value,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{derive_params, find_filter, FILTERS};

    fn gradient(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[(x * 7) as u8, (y * 11) as u8, ((x + y) * 3) as u8]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_every_catalog_filter_is_supported() {
        for spec in FILTERS {
            assert!(
                SoftwareEngine::supported_filters().contains(&spec.name),
                "{} missing",
                spec.name
            );
        }
    }

    #[test]
    fn test_every_filter_preserves_dimensions() {
        let img = gradient(24, 18);
        for spec in FILTERS {
            let params = derive_params(spec, 0.5, (img.width, img.height));
            let out = SoftwareEngine.apply(&img, spec, &params).unwrap();
            assert_eq!((out.width, out.height), (24, 18), "{}", spec.name);
            assert_eq!(out.pixels.len(), img.pixels.len());
        }
    }

    #[test]
    fn test_empty_params_use_defaults() {
        let img = gradient(8, 8);
        for spec in FILTERS {
            assert!(SoftwareEngine
                .apply(&img, spec, &FilterParams::default())
                .is_ok());
        }
    }

    #[test]
    fn test_unsupported_filter() {
        let spec = FilterSpec::new("CIKaleidoscope", &[]);
        let err = SoftwareEngine
            .apply(&gradient(4, 4), &spec, &FilterParams::default())
            .unwrap_err();
        assert_eq!(err, EngineError::UnsupportedFilter("CIKaleidoscope".into()));
    }

    #[test]
    fn test_empty_image_has_no_extent() {
        let empty = DecodedImage {
            width: 0,
            height: 0,
            pixels: vec![],
        };
        let spec = find_filter(FILTERS, "CIBloom").unwrap();
        let err = SoftwareEngine
            .apply(&empty, spec, &FilterParams::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptyExtent { .. }));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let spec = find_filter(FILTERS, "CITwirlDistortion").unwrap();
        let params = FilterParams {
            angle: Some(f32::NAN),
            ..Default::default()
        };
        let err = SoftwareEngine
            .apply(&gradient(4, 4), spec, &params)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidParameter {
                kind: ParamKind::Angle,
                ..
            }
        ));
    }

    #[test]
    fn test_engine_through_box() {
        let engine: Box<dyn ImageEngine> = Box::new(SoftwareEngine::new());
        let spec = find_filter(FILTERS, "CIPhotoEffectProcess").unwrap();
        let img = gradient(6, 6);
        let direct = SoftwareEngine.apply(&img, spec, &FilterParams::default());
        assert_eq!(engine.apply(&img, spec, &FilterParams::default()), direct);
    }
}
