//! 3x3 convolution with clamp-to-edge sampling.
//!
//! The kernel is always evaluated against the unmodified source buffer; the
//! output goes into a fresh buffer of the same size.

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::{Pixel, clamp_pixel, rgb};

pub(crate) type Kernel3 = [[f32; 3]; 3];

const SHARPEN: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

pub(crate) fn sharpen(src: &PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
    convolve_3x3(src, &SHARPEN, stop, clamp_pixel)
}

/// Convolve every channel of `src` with `kernel`, passing each raw sum
/// through `finish` before storing it.
pub(crate) fn convolve_3x3<F>(
    src: &PixelBuffer,
    kernel: &Kernel3,
    stop: &dyn Stop,
    finish: F,
) -> Result<PixelBuffer, BitmapError>
where
    F: Fn(Pixel) -> Pixel,
{
    let (width, height) = src.dimensions();
    let mut out = Vec::with_capacity(width * height);

    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width {
            let mut sum = rgb(0.0, 0.0, 0.0);
            for (dy, kernel_row) in kernel.iter().enumerate() {
                for (dx, &weight) in kernel_row.iter().enumerate() {
                    if weight == 0.0 {
                        continue;
                    }
                    let p = src.sample_clamped(
                        x as isize + dx as isize - 1,
                        y as isize + dy as isize - 1,
                    );
                    sum.r += p.r * weight;
                    sum.g += p.g * weight;
                    sum.b += p.b * weight;
                }
            }
            out.push(finish(sum));
        }
    }

    PixelBuffer::from_pixels(width, height, out)
}
