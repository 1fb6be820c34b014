use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::clamp_pixel;

/// Keep the top-left `width x height` corner of an image.
///
/// Requests larger than the image are clamped to the image size, so a crop
/// never pads or upsizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crop {
    width: usize,
    height: usize,
}

impl Crop {
    /// Zero dimensions are raised to 1 so the output is never empty.
    pub fn new(width: usize, height: usize) -> Crop {
        Crop {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Output dimensions for an input of `in_width x in_height`.
    pub fn output_dimensions(&self, in_width: usize, in_height: usize) -> (usize, usize) {
        (self.width.min(in_width), self.height.min(in_height))
    }

    pub(crate) fn apply(&self, image: PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
        let (in_width, in_height) = image.dimensions();
        let (out_width, out_height) = self.output_dimensions(in_width, in_height);

        let mut out = Vec::with_capacity(out_width * out_height);
        for y in 0..out_height {
            if y % 16 == 0 {
                stop.check()?;
            }
            out.extend(image.row(y)?[..out_width].iter().copied().map(clamp_pixel));
        }
        PixelBuffer::from_pixels(out_width, out_height, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::rgb;
    use enough::Unstoppable;

    #[test]
    fn zero_is_raised_to_one() {
        let crop = Crop::new(0, 0);
        assert_eq!((crop.width(), crop.height()), (1, 1));
    }

    #[test]
    fn larger_than_image_is_identity() {
        let src = PixelBuffer::from_fn(3, 2, |x, y| rgb(x as f32 / 2.0, y as f32, 0.0)).unwrap();
        let out = Crop::new(10, 10).apply(src.clone(), &Unstoppable).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn mixed_clamp() {
        let src = PixelBuffer::new(5, 2).unwrap();
        let out = Crop::new(3, 9).apply(src, &Unstoppable).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
    }

    #[test]
    fn output_is_clamped() {
        let src = PixelBuffer::filled(4, 4, rgb(-1.0, 2.0, 0.5)).unwrap();
        for crop in [Crop::new(2, 2), Crop::new(4, 4)] {
            let out = crop.apply(src.clone(), &Unstoppable).unwrap();
            assert!(out.pixels().iter().all(|&p| p == rgb(0.0, 1.0, 0.5)));
        }
    }
}
