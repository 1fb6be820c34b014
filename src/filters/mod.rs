//! Pixel and kernel filters.
//!
//! A [`Filter`] is an immutable value carrying its own parameters. Applying
//! it consumes a [`PixelBuffer`] and produces the next one, so filters that
//! change dimensions ([`Filter::Crop`]) need no special casing.
//!
//! Convolution filters sample with clamp-to-edge addressing and every filter
//! clamps its output channels to `[0, 1]`.

mod color;
mod convolve;
mod crop;
mod edge;
mod gaussian_blur;

pub use crop::Crop;
pub use edge::EdgeDetect;
pub use gaussian_blur::GaussianBlur;

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;

/// One step of a [`crate::Pipeline`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Replace each pixel by its clamped BT.601 luminance.
    Grayscale,
    /// Invert each channel, quantized through 8 bits.
    Negative,
    /// Fixed sepia color matrix.
    Sepia,
    /// Keep the top-left sub-rectangle.
    Crop(Crop),
    /// 3x3 sharpening kernel.
    Sharpen,
    /// Laplacian edge detection with binarized output.
    EdgeDetect(EdgeDetect),
    /// Separable Gaussian blur.
    GaussianBlur(GaussianBlur),
}

impl Filter {
    /// Crop to at most `width x height`; zero is raised to 1.
    pub fn crop(width: usize, height: usize) -> Self {
        Self::Crop(Crop::new(width, height))
    }

    /// Edge detection; `threshold` must be finite.
    pub fn edge_detect(threshold: f32) -> Result<Self, BitmapError> {
        EdgeDetect::new(threshold).map(Self::EdgeDetect)
    }

    /// Gaussian blur; `sigma` must be finite and positive.
    pub fn gaussian_blur(sigma: f32) -> Result<Self, BitmapError> {
        GaussianBlur::new(sigma).map(Self::GaussianBlur)
    }

    /// Short human-readable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Negative => "negative",
            Self::Sepia => "sepia",
            Self::Crop(_) => "crop",
            Self::Sharpen => "sharpen",
            Self::EdgeDetect(_) => "edge detect",
            Self::GaussianBlur(_) => "gaussian blur",
        }
    }

    /// Apply this filter to `image`.
    pub fn apply(&self, image: PixelBuffer, stop: impl Stop) -> Result<PixelBuffer, BitmapError> {
        self.run(image, &stop)
    }

    pub(crate) fn run(&self, image: PixelBuffer, stop: &dyn Stop) -> Result<PixelBuffer, BitmapError> {
        match self {
            Self::Grayscale => color::grayscale(image, stop),
            Self::Negative => color::negative(image, stop),
            Self::Sepia => color::sepia(image, stop),
            Self::Crop(crop) => crop.apply(image, stop),
            Self::Sharpen => convolve::sharpen(&image, stop),
            Self::EdgeDetect(edge) => edge.apply(&image, stop),
            Self::GaussianBlur(blur) => blur.apply(&image, stop),
        }
    }
}

impl From<Crop> for Filter {
    fn from(c: Crop) -> Self {
        Self::Crop(c)
    }
}

impl From<EdgeDetect> for Filter {
    fn from(e: EdgeDetect) -> Self {
        Self::EdgeDetect(e)
    }
}

impl From<GaussianBlur> for Filter {
    fn from(g: GaussianBlur) -> Self {
        Self::GaussianBlur(g)
    }
}
