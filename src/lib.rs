//! # zenfilters
//!
//! 24-bit BMP decoder and encoder plus an ordered filter pipeline over
//! normalized floating-point RGB.
//!
//! ## Supported Formats
//!
//! - Decode of uncompressed 24-bit BMP, bottom-up or top-down (negative height)
//! - Encode of uncompressed 24-bit bottom-up BMP
//!
//! ## Filters
//!
//! Grayscale, negative, sepia, crop, sharpen, edge detection and separable
//! Gaussian blur. See [`Filter`].
//!
//! ## Non-Goals
//!
//! - Palettized, RLE, bitfield, 16-bit or 32-bit BMP variants
//! - Streaming or partial decode
//! - Color management; channels are treated as linear values in `[0, 1]`
//!
//! ## Usage
//!
//! ```no_run
//! use zenfilters::{Filter, Pipeline, Unstoppable, decode_bmp, encode_bmp};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! let image = decode_bmp(data, Unstoppable)?;
//! let pipeline = Pipeline::new()
//!     .with(Filter::crop(800, 600))
//!     .with(Filter::gaussian_blur(1.5)?)
//!     .with(Filter::Grayscale);
//! let image = pipeline.apply(image, Unstoppable)?;
//! let encoded = encode_bmp(&image, Unstoppable)?;
//! # Ok::<(), zenfilters::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bmp;
mod buffer;
pub mod chain;
mod decode;
mod encode;
mod error;
pub mod filters;
mod io;
mod limits;
mod pipeline;
mod pixel;

// Re-exports
pub use bmp::{BmpInfo, DEFAULT_PIXELS_PER_METER};
pub use buffer::PixelBuffer;
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{BitmapError, ErrorKind};
pub use filters::Filter;
pub use io::{read_bmp, read_bmp_file, write_bmp, write_bmp_file};
pub use limits::Limits;
pub use pipeline::Pipeline;
pub use pixel::{Pixel, clamp_pixel, clamp_unit, gray, luminance, rgb};

/// Decode a 24-bit BMP with no size limits.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<PixelBuffer, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode as a 24-bit bottom-up BMP with default header settings.
pub fn encode_bmp(buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::new().encode(buffer, stop)
}
