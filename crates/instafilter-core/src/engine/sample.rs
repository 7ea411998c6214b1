//! Pixel sampling helpers shared by the filters.

use crate::decode::DecodedImage;

/// Smootherstep interpolation: `6t^5 - 15t^4 + 10t^3`, with `t` clamped to 0-1.
#[inline]
pub(crate) fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn get_pixel_f32(image: &DecodedImage, px: usize, py: usize) -> [f32; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [
        image.pixels[idx] as f32,
        image.pixels[idx + 1] as f32,
        image.pixels[idx + 2] as f32,
    ]
}

/// Sample with bilinear interpolation at continuous pixel-center coordinates.
///
/// `(x + 0.5, y + 0.5)` of integer `x, y` hits pixel `(x, y)` exactly.
/// Coordinates outside the image clamp to the nearest edge pixel.
pub(crate) fn sample_bilinear(image: &DecodedImage, x: f32, y: f32) -> [u8; 3] {
    let max_x = (image.width - 1) as f32;
    let max_y = (image.height - 1) as f32;
    let x = (x - 0.5).clamp(0.0, max_x);
    let y = (y - 0.5).clamp(0.0, max_y);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(image.width as usize - 1);
    let y1 = (y0 + 1).min(image.height as usize - 1);

    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = get_pixel_f32(image, x0, y0);
    let p10 = get_pixel_f32(image, x1, y0);
    let p01 = get_pixel_f32(image, x0, y1);
    let p11 = get_pixel_f32(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}

/// Build an output image of the same size by inverse mapping.
///
/// `source_of` receives the destination pixel center and returns the source
/// coordinate to sample.
pub(crate) fn remap<F>(image: &DecodedImage, source_of: F) -> DecodedImage
where
    F: Fn(f32, f32) -> (f32, f32),
{
    let mut output = Vec::with_capacity(image.pixels.len());

    for dst_y in 0..image.height {
        for dst_x in 0..image.width {
            let (sx, sy) = source_of(dst_x as f32 + 0.5, dst_y as f32 + 0.5);
            output.extend_from_slice(&sample_bilinear(image, sx, sy));
        }
    }

    DecodedImage::new(image.width, image.height, output)
}

/// Apply a per-pixel color transform on normalized (0-1) RGB values.
pub(crate) fn map_colors<F>(image: &DecodedImage, transform: F) -> DecodedImage
where
    F: Fn(f32, f32, f32) -> (f32, f32, f32),
{
    let mut pixels = image.pixels.clone();

    for chunk in pixels.chunks_exact_mut(3) {
        let (r, g, b) = transform(
            chunk[0] as f32 / 255.0,
            chunk[1] as f32 / 255.0,
            chunk[2] as f32 / 255.0,
        );
        chunk[0] = to_u8(r);
        chunk[1] = to_u8(g);
        chunk[2] = to_u8(b);
    }

    DecodedImage::new(image.width, image.height, pixels)
}

#[inline]
pub(crate) fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> DecodedImage {
        // 2x2: black, white / white, black
        DecodedImage::new(
            2,
            2,
            vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0],
        )
    }

    #[test]
    fn test_smootherstep_boundaries() {
        assert_eq!(smootherstep(0.0), 0.0);
        assert_eq!(smootherstep(1.0), 1.0);
        assert!((smootherstep(0.5) - 0.5).abs() < f32::EPSILON);
        assert_eq!(smootherstep(-1.0), 0.0);
        assert_eq!(smootherstep(2.0), 1.0);
    }

    #[test]
    fn test_sample_pixel_centers_exact() {
        let img = checker();
        assert_eq!(sample_bilinear(&img, 0.5, 0.5), [0, 0, 0]);
        assert_eq!(sample_bilinear(&img, 1.5, 0.5), [255, 255, 255]);
        assert_eq!(sample_bilinear(&img, 0.5, 1.5), [255, 255, 255]);
    }

    #[test]
    fn test_sample_midpoint_blends() {
        let img = checker();
        // Halfway between black and white horizontally
        assert_eq!(sample_bilinear(&img, 1.0, 0.5), [128, 128, 128]);
    }

    #[test]
    fn test_sample_clamps_outside() {
        let img = checker();
        assert_eq!(sample_bilinear(&img, -10.0, -10.0), [0, 0, 0]);
        assert_eq!(sample_bilinear(&img, 10.0, -10.0), [255, 255, 255]);
    }

    #[test]
    fn test_remap_identity() {
        let img = checker();
        assert_eq!(remap(&img, |x, y| (x, y)), img);
    }

    #[test]
    fn test_map_colors_identity() {
        let img = checker();
        assert_eq!(map_colors(&img, |r, g, b| (r, g, b)), img);
    }
}
