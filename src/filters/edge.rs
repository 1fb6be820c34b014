use enough::Stop;

use super::convolve::{Kernel3, convolve_3x3};
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::{clamp_unit, gray, luminance};

const LAPLACIAN: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];

/// Laplacian edge detector.
///
/// The image is reduced to clamped luminance, exactly as the grayscale
/// filter does, convolved with a 4-neighbour Laplacian, and each clamped
/// response is binarized: 1.0 where it exceeds the threshold, 0.0 elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDetect {
    threshold: f32,
}

impl EdgeDetect {
    pub fn new(threshold: f32) -> Result<EdgeDetect, BitmapError> {
        if !threshold.is_finite() {
            return Err(BitmapError::InvalidParameter(format!(
                "edge threshold must be finite, got {threshold}"
            )));
        }
        Ok(EdgeDetect { threshold })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub(crate) fn apply(&self, image: &PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
        let (width, height) = image.dimensions();
        let luma: Vec<_> = image
            .pixels()
            .iter()
            .map(|&p| gray(clamp_unit(luminance(p))))
            .collect();
        let luma = PixelBuffer::from_pixels(width, height, luma)?;

        stop.check()?;
        convolve_3x3(&luma, &LAPLACIAN, stop, |sum| {
            let v = clamp_unit(sum.r);
            gray(if v > self.threshold { 1.0 } else { 0.0 })
        })
    }
}
