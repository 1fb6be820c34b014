use crate::error::BitmapError;
use crate::pixel::Pixel;

/// A `width x height` grid of [`Pixel`]s stored row-major, row 0 at the visual top.
///
/// Dimensions are fixed at construction and always non-zero. Every checked
/// accessor rejects coordinates outside the grid with
/// [`BitmapError::OutOfBounds`] rather than clamping them.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self, BitmapError> {
        Self::filled(width, height, Pixel::default())
    }

    /// Buffer with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self, BitmapError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; len],
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, BitmapError>
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, BitmapError> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(BitmapError::format("pixel count mismatch"));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, BitmapError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), BitmapError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = pixel;
        Ok(())
    }

    /// Row `y`, left to right.
    pub fn row(&self, y: usize) -> Result<&[Pixel], BitmapError> {
        if y >= self.height {
            return Err(self.out_of_bounds(0, y));
        }
        let start = y * self.width;
        Ok(&self.pixels[start..start + self.width])
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels, self.width, self.height)
    }

    /// Sample with clamp-to-edge addressing: out-of-range coordinates
    /// reuse the nearest edge pixel.
    #[inline]
    pub(crate) fn sample_clamped(&self, x: isize, y: isize) -> Pixel {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.pixels[cy * self.width + cx]
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BitmapError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(y * self.width + x)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> BitmapError {
        BitmapError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(feature = "imgref")]
impl From<PixelBuffer> for imgref::ImgVec<Pixel> {
    fn from(buf: PixelBuffer) -> Self {
        imgref::ImgVec::new(buf.pixels, buf.width, buf.height)
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::format("zero dimension"));
    }
    width
        .checked_mul(height)
        .ok_or(BitmapError::DimensionsTooLarge {
            width: u32::try_from(width).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
        })
}
