//! Geometric distortions: twirl, bump and circle splash.
//!
//! All three use inverse mapping around a center point and keep the source
//! dimensions. Pixels outside the effect radius map to themselves.

use super::sample::{remap, smootherstep};
use crate::decode::DecodedImage;
use crate::filter::Point;

/// Rotate pixels around `center`, by `angle` radians at the center fading to
/// zero at `radius`.
pub(crate) fn twirl(image: &DecodedImage, center: Point, radius: f32, angle: f32) -> DecodedImage {
    if radius <= 0.0 || angle == 0.0 {
        return image.clone();
    }

    remap(image, |x, y| {
        let dx = x - center.x;
        let dy = y - center.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist >= radius {
            return (x, y);
        }

        let theta = angle * smootherstep(1.0 - dist / radius);
        let (sin, cos) = theta.sin_cos();
        (
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    })
}

/// Magnify (positive `scale`) or pinch (negative `scale`) inside `radius`.
pub(crate) fn bump(image: &DecodedImage, center: Point, radius: f32, scale: f32) -> DecodedImage {
    if radius <= 0.0 || scale == 0.0 {
        return image.clone();
    }

    remap(image, |x, y| {
        let dx = x - center.x;
        let dy = y - center.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist >= radius {
            return (x, y);
        }

        let t = dist / radius;
        let falloff = (1.0 - t * t).powi(2);
        let factor = 1.0 / (1.0 + scale * falloff).max(0.05);
        (center.x + dx * factor, center.y + dy * factor)
    })
}

/// Keep the disc of `radius` around `center` and smear its rim outward.
pub(crate) fn circle_splash(image: &DecodedImage, center: Point, radius: f32) -> DecodedImage {
    let radius = radius.max(0.0);

    remap(image, |x, y| {
        let dx = x - center.x;
        let dy = y - center.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= radius {
            return (x, y);
        }

        let k = radius / dist;
        (center.x + dx * k, center.y + dy * k)
    })
}
