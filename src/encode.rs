use std::io::Write;

use enough::Stop;

use crate::bmp::DEFAULT_PIXELS_PER_METER;
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;

/// Configured BMP encode. Output is always 24-bit, uncompressed, bottom-up.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    pixels_per_meter: u32,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self {
            pixels_per_meter: DEFAULT_PIXELS_PER_METER,
        }
    }

    /// Resolution stored in both header resolution fields. Cosmetic.
    pub fn with_resolution(mut self, pixels_per_meter: u32) -> Self {
        self.pixels_per_meter = pixels_per_meter;
        self
    }

    pub fn encode(&self, buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        crate::bmp::encode(buffer, self.pixels_per_meter, &stop)
    }

    /// Encode and hand the whole file to `sink`.
    pub fn encode_to<W: Write>(
        &self,
        buffer: &PixelBuffer,
        mut sink: W,
        stop: impl Stop,
    ) -> Result<(), BitmapError> {
        let bytes = self.encode(buffer, stop)?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }
}
