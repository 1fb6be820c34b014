//! BMP encoder: uncompressed 24-bit, bottom-up.

use enough::Stop;
use log::debug;

use super::{HEADER_SIZE, row_stride};
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::to_u8;

/// Encode `buffer` as a 24-bit bottom-up BMP.
pub(crate) fn encode_bmp(
    buffer: &PixelBuffer,
    pixels_per_meter: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let (w, h) = buffer.dimensions();
    let too_large = || BitmapError::DimensionsTooLarge {
        width: u32::try_from(w).unwrap_or(u32::MAX),
        height: u32::try_from(h).unwrap_or(u32::MAX),
    };
    let width = i32::try_from(w).map_err(|_| too_large())?;
    let height = i32::try_from(h).map_err(|_| too_large())?;

    let row_stride = row_stride(w).ok_or_else(too_large)?;
    let pixel_data_size = row_stride.checked_mul(h).ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(HEADER_SIZE)
        .filter(|&n| u32::try_from(n).is_ok())
        .ok_or_else(too_large)?;

    debug!("encoding {w}x{h} BMP, {file_size} bytes");

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(
        &mut out,
        file_size,
        pixel_data_size,
        width,
        height,
        pixels_per_meter,
    );

    let pad_bytes = row_stride - w * 3;
    // Bottom-up: the visual top row is the last scanline in the file.
    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        for p in buffer.row(row)? {
            out.push(to_u8(p.b));
            out.push(to_u8(p.g));
            out.push(to_u8(p.r));
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: i32,
    height: i32,
    pixels_per_meter: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&pixels_per_meter.to_le_bytes()); // h resolution
    out.extend_from_slice(&pixels_per_meter.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
