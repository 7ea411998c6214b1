//! Color filters: sepia, photo effects, vignette and bloom.

use image::imageops;

use super::sample::{map_colors, smootherstep, to_u8};
use crate::decode::DecodedImage;
use crate::filter::Point;

/// Blend toward a sepia tone by `intensity` (0 = original, 1 = full sepia).
pub(crate) fn sepia_tone(image: &DecodedImage, intensity: f32) -> DecodedImage {
    let amount = intensity.clamp(0.0, 1.0);
    map_colors(image, |r, g, b| {
        let sr = 0.393 * r + 0.769 * g + 0.189 * b;
        let sg = 0.349 * r + 0.686 * g + 0.168 * b;
        let sb = 0.272 * r + 0.534 * g + 0.131 * b;
        (
            r + (sr - r) * amount,
            g + (sg - g) * amount,
            b + (sb - b) * amount,
        )
    })
}

/// Faded, warm instant-camera look.
pub(crate) fn photo_effect_instant(image: &DecodedImage) -> DecodedImage {
    map_colors(image, |r, g, b| {
        // Lift blacks and compress the range
        let fade = |v: f32| 0.07 + v * 0.86;
        (fade(r) * 1.06, fade(g) * 1.01, fade(b) * 0.90)
    })
}

/// Cool, slightly punchier cross-processed look.
pub(crate) fn photo_effect_process(image: &DecodedImage) -> DecodedImage {
    map_colors(image, |r, g, b| {
        let contrast = |v: f32| (v - 0.5) * 1.15 + 0.5;
        (contrast(r) * 0.94, contrast(g) * 1.02, contrast(b) * 1.10)
    })
}

/// Darken outside `radius` around `center`, falling off over half a radius.
pub(crate) fn vignette(
    image: &DecodedImage,
    center: Point,
    intensity: f32,
    radius: f32,
) -> DecodedImage {
    let radius = radius.max(0.0);
    let falloff = (radius * 0.5).max(1.0);
    let mut pixels = image.pixels.clone();

    for (i, chunk) in pixels.chunks_exact_mut(3).enumerate() {
        let x = (i % image.width as usize) as f32 + 0.5;
        let y = (i / image.width as usize) as f32 + 0.5;
        let dist = ((x - center.x).powi(2) + (y - center.y).powi(2)).sqrt();

        let mask = smootherstep((dist - radius) / falloff);
        let factor = (1.0 - intensity * mask).clamp(0.0, 1.0);
        if factor >= 1.0 {
            continue;
        }
        for c in chunk.iter_mut() {
            *c = to_u8(*c as f32 / 255.0 * factor);
        }
    }

    DecodedImage::new(image.width, image.height, pixels)
}

/// Soft glow: screen-blend a blurred copy scaled by `intensity`.
pub(crate) fn bloom(image: &DecodedImage, radius: f32, intensity: f32) -> DecodedImage {
    let amount = intensity.clamp(0.0, 1.0);
    // A kernel wider than the image adds nothing but cost
    let sigma = (radius / 2.0).min(image.width.max(image.height) as f32);
    let blurred = match image.to_rgb_image() {
        Some(rgb) if radius >= 1.0 => imageops::blur(&rgb, sigma).into_raw(),
        _ => image.pixels.clone(),
    };

    let pixels = image
        .pixels
        .iter()
        .zip(blurred.iter())
        .map(|(&base, &glow)| {
            let base = base as f32 / 255.0;
            let glow = glow as f32 / 255.0 * amount;
            to_u8(1.0 - (1.0 - base) * (1.0 - glow))
        })
        .collect();

    DecodedImage::new(image.width, image.height, pixels)
}
