//! 24-bit uncompressed BMP decoder and encoder (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod decode;
mod encode;

use enough::Stop;

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Size of the file header plus BITMAPINFOHEADER.
pub(crate) const HEADER_SIZE: usize = 54;

/// Default resolution written to the header (72 DPI).
pub const DEFAULT_PIXELS_PER_METER: u32 = 2835;

/// Header facts of a 24-bit BMP, available without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    /// First stored scanline is the visual top row (negative height field).
    pub top_down: bool,
    /// Byte offset of the first scanline.
    pub data_offset: u32,
    /// File size as declared in the header; not validated.
    pub file_size: u32,
    /// Bytes per stored scanline including padding.
    pub row_stride: usize,
}

impl BmpInfo {
    /// Probe header without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        decode::parse_bmp_header(data)
    }
}

/// Scanline length for `width` 24-bit pixels, padded to 4 bytes.
pub(crate) fn row_stride(width: usize) -> Option<usize> {
    width
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Decode BMP data into a top-to-bottom [`PixelBuffer`].
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelBuffer, BitmapError> {
    let info = decode::parse_bmp_header(data)?;
    if let Some(limits) = limits {
        limits.check_image(info.width, info.height)?;
    }
    stop.check()?;
    decode::decode_bmp_pixels(data, &info, stop)
}

/// Encode to BMP.
pub(crate) fn encode(
    buffer: &PixelBuffer,
    pixels_per_meter: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(buffer, pixels_per_meter, stop)
}
