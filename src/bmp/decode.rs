//! 24-bit uncompressed BMP decoder.

use enough::Stop;
use log::{debug, warn};

use super::{BmpInfo, HEADER_SIZE, row_stride};
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::{Pixel, from_u8};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        let new_pos = self
            .pos
            .checked_add(n)
            .filter(|&p| p <= self.data.len())
            .ok_or_else(|| BitmapError::format("truncated header"))?;
        self.pos = new_pos;
        Ok(())
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let bytes = self
            .data
            .get(self.pos..self.pos + N)
            .ok_or_else(|| BitmapError::format("truncated header"))?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos += N;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse and validate the 54-byte file + info header.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpInfo, BitmapError> {
    if data.len() < HEADER_SIZE {
        return Err(BitmapError::format("truncated header"));
    }

    let mut bytes = Cursor::new(data);

    if bytes.read_fixed_bytes::<2>()? != *b"BM" {
        return Err(BitmapError::format("invalid signature"));
    }
    let file_size = bytes.get_u32_le()?;
    // Reserved (4 bytes)
    bytes.skip(4)?;
    let data_offset = bytes.get_u32_le()?;

    let _info_size = bytes.get_u32_le()?;
    let raw_width = bytes.get_i32_le()?;
    let raw_height = bytes.get_i32_le()?;
    let planes = bytes.get_u16_le()?;
    let bits_per_pixel = bytes.get_u16_le()?;
    let compression = bytes.get_u32_le()?;

    if bits_per_pixel != 24 || compression != 0 {
        return Err(BitmapError::format("unsupported bitmap variant"));
    }
    if (data_offset as usize) < HEADER_SIZE || data_offset as usize > data.len() {
        return Err(BitmapError::format("invalid data offset"));
    }
    if planes != 1 {
        warn!("BMP planes field is {planes}, expected 1");
    }
    if file_size as usize != data.len() {
        warn!(
            "BMP file size field ({file_size}) doesn't match actual size ({})",
            data.len()
        );
    }

    let width = raw_width.unsigned_abs();
    let height = raw_height.unsigned_abs();
    if width == 0 || height == 0 {
        return Err(BitmapError::format("zero dimension"));
    }

    let stride = row_stride(width as usize).ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    Ok(BmpInfo {
        width,
        height,
        top_down: raw_height < 0,
        data_offset,
        file_size,
        row_stride: stride,
    })
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode the scanlines described by `info` into a top-to-bottom [`PixelBuffer`].
pub(crate) fn decode_bmp_pixels(
    data: &[u8],
    info: &BmpInfo,
    stop: &dyn Stop,
) -> Result<PixelBuffer, BitmapError> {
    let w = info.width as usize;
    let h = info.height as usize;
    let stride = info.row_stride;
    let too_large = BitmapError::DimensionsTooLarge {
        width: info.width,
        height: info.height,
    };

    let required = stride
        .checked_mul(h)
        .and_then(|n| n.checked_add(info.data_offset as usize))
        .ok_or(too_large)?;
    if data.len() < required {
        return Err(BitmapError::format("truncated pixel data"));
    }

    debug!(
        "decoding {}x{} BMP ({}), stride {stride}",
        w,
        h,
        if info.top_down { "top-down" } else { "bottom-up" }
    );

    let mut pixels = vec![Pixel::default(); w * h];
    let scanlines = data[info.data_offset as usize..required].chunks_exact(stride);

    for (file_row, scanline) in scanlines.enumerate() {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let y = if info.top_down { file_row } else { h - 1 - file_row };
        let out = &mut pixels[y * w..(y + 1) * w];
        for (dst, bgr) in out.iter_mut().zip(scanline[..w * 3].chunks_exact(3)) {
            *dst = Pixel {
                r: from_u8(bgr[2]),
                g: from_u8(bgr[1]),
                b: from_u8(bgr[0]),
            };
        }
    }

    PixelBuffer::from_pixels(w, h, pixels)
}
