use crate::error::BitmapError;
use crate::pixel::Pixel;

/// Caps applied to a BMP header before any pixel memory is allocated.
///
/// Every field defaults to `None` (no cap).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded [`crate::PixelBuffer`] in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Validate a `width x height` image against every configured cap.
    pub(crate) fn check_image(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let pixels = u64::from(width) * u64::from(height);
        let bytes = pixels.saturating_mul(core::mem::size_of::<Pixel>() as u64);

        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;
        exceeds("decoded size in bytes", bytes, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, cap: Option<u64>) -> Result<(), BitmapError> {
    match cap {
        Some(cap) if value > cap => Err(BitmapError::LimitExceeded(format!(
            "{what} {value} exceeds limit {cap}"
        ))),
        _ => Ok(()),
    }
}
