//! Separable Gaussian blur.
//!
//! The 2-D kernel is split into a horizontal pass followed by a vertical pass
//! over the horizontal result. Both passes use the same normalized 1-D kernel
//! of radius `ceil(3 * sigma)` and clamp-to-edge sampling.

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::{Pixel, clamp_pixel, rgb};

/// Largest kernel radius accepted.
pub const MAX_BLUR_RADIUS: usize = 1 << 16;

#[derive(Clone, Debug, PartialEq)]
pub struct GaussianBlur {
    sigma: f32,
    radius: usize,
    /// `2 * radius + 1` weights summing to 1, centered at `radius`.
    kernel: Vec<f32>,
}

impl GaussianBlur {
    /// Precompute the kernel for `sigma`.
    ///
    /// `sigma` must be finite and positive, and the resulting radius must not
    /// exceed [`MAX_BLUR_RADIUS`]; anything else is an
    /// [`BitmapError::InvalidParameter`].
    pub fn new(sigma: f32) -> Result<GaussianBlur, BitmapError> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(BitmapError::InvalidParameter(format!(
                "blur sigma must be finite and positive, got {sigma}"
            )));
        }
        let radius_f = (3.0 * sigma).ceil();
        if radius_f > MAX_BLUR_RADIUS as f32 {
            return Err(BitmapError::InvalidParameter(format!(
                "blur sigma {sigma} needs a kernel radius above {MAX_BLUR_RADIUS}"
            )));
        }
        let radius = radius_f as usize;

        let two_sigma_sq = 2.0 * sigma * sigma;
        let mut kernel: Vec<f32> = (0..=2 * radius)
            .map(|i| {
                let d = i as f32 - radius as f32;
                (-(d * d) / two_sigma_sq).exp()
            })
            .collect();
        let sum: f32 = kernel.iter().sum();
        kernel.iter_mut().for_each(|k| *k /= sum);

        Ok(GaussianBlur {
            sigma,
            radius,
            kernel,
        })
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Normalized 1-D weights, index `radius` is the center tap.
    pub fn kernel(&self) -> &[f32] {
        &self.kernel
    }

    pub(crate) fn apply(&self, image: &PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
        let horizontal = self.pass(image, Direction::Horizontal, stop)?;
        self.pass(&horizontal, Direction::Vertical, stop)
    }

    fn pass(
        &self,
        src: &PixelBuffer,
        direction: Direction,
        stop: &dyn Stop,
    ) -> Result<PixelBuffer, BitmapError> {
        let (width, height) = src.dimensions();
        let radius = self.radius as isize;
        let mut out = Vec::with_capacity(width * height);

        for y in 0..height {
            if y % 16 == 0 {
                stop.check()?;
            }
            for x in 0..width {
                let (x, y) = (x as isize, y as isize);
                let mut acc: Pixel = rgb(0.0, 0.0, 0.0);
                for (i, &weight) in (-radius..=radius).zip(&self.kernel) {
                    let p = match direction {
                        Direction::Horizontal => src.sample_clamped(x + i, y),
                        Direction::Vertical => src.sample_clamped(x, y + i),
                    };
                    acc.r += p.r * weight;
                    acc.g += p.g * weight;
                    acc.b += p.b * weight;
                }
                out.push(clamp_pixel(acc));
            }
        }

        PixelBuffer::from_pixels(width, height, out)
    }
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Horizontal,
    Vertical,
}
