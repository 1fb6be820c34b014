//! Per-pixel color filters: grayscale, negative, sepia.

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::{Pixel, clamp_pixel, clamp_unit, gray, luminance, rgb};

/// Sepia tone matrix, one row per output channel, columns (r, g, b).
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

pub(crate) fn grayscale(image: PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
    map_pixels(image, stop, |p| gray(clamp_unit(luminance(p))))
}

pub(crate) fn negative(image: PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
    map_pixels(image, stop, |p| rgb(invert(p.r), invert(p.g), invert(p.b)))
}

pub(crate) fn sepia(image: PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
    map_pixels(image, stop, |p| clamp_pixel(color_matrix(&SEPIA, p)))
}

/// `1 - c`, snapped to the nearest 8-bit level.
#[inline]
fn invert(c: f32) -> f32 {
    clamp_unit(((1.0 - c) * 255.0).round() / 255.0)
}

#[inline]
fn color_matrix(m: &[[f32; 3]; 3], p: Pixel) -> Pixel {
    let apply = |row: &[f32; 3]| row[0] * p.r + row[1] * p.g + row[2] * p.b;
    rgb(apply(&m[0]), apply(&m[1]), apply(&m[2]))
}

/// Rewrite every pixel in place, checking `stop` every 16 rows.
fn map_pixels<F>(mut image: PixelBuffer, stop: &dyn Stop, f: F) -> Result<PixelBuffer, BitmapError>
where
    F: Fn(Pixel) -> Pixel,
{
    let width = image.width();
    for (y, row) in image.pixels_mut().chunks_exact_mut(width).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for p in row {
            *p = f(*p);
        }
    }
    Ok(image)
}
