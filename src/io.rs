//! Byte source and sink glue for the codec.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::buffer::PixelBuffer;
use crate::encode::EncodeRequest;
use crate::error::BitmapError;

/// Read a whole BMP from `source` and decode it.
pub fn read_bmp<R: Read>(mut source: R, stop: impl Stop) -> Result<PixelBuffer, BitmapError> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;
    crate::bmp::decode(&data, None, &stop)
}

/// Encode `buffer` and write every byte to `sink`.
pub fn write_bmp<W: Write>(
    buffer: &PixelBuffer,
    sink: W,
    stop: impl Stop,
) -> Result<(), BitmapError> {
    EncodeRequest::new().encode_to(buffer, sink, stop)
}

pub fn read_bmp_file(path: impl AsRef<Path>) -> Result<PixelBuffer, BitmapError> {
    let data = std::fs::read(path)?;
    crate::bmp::decode(&data, None, &Unstoppable)
}

pub fn write_bmp_file(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), BitmapError> {
    let file = File::create(path)?;
    write_bmp(buffer, BufWriter::new(file), Unstoppable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::rgb;

    struct FullSink {
        accepted: usize,
    }

    impl Write for FullSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.accepted >= 10 {
                return Ok(0);
            }
            let n = buf.len().min(10 - self.accepted);
            self.accepted += n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn short_sink_is_io_error() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        let err = write_bmp(&buf, FullSink { accepted: 0 }, Unstoppable).unwrap_err();
        assert!(matches!(err, BitmapError::Io(_)));
    }

    #[test]
    fn reader_roundtrip() {
        let buf = PixelBuffer::filled(3, 3, rgb(0.2, 0.4, 0.6)).unwrap();
        let mut bytes = Vec::new();
        write_bmp(&buf, &mut bytes, Unstoppable).unwrap();
        let back = read_bmp(bytes.as_slice(), Unstoppable).unwrap();
        assert_eq!(back.dimensions(), (3, 3));
        let p = back.get_pixel(1, 1).unwrap();
        assert!((p.g - 0.4).abs() <= 1.0 / 255.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_bmp_file("/nonexistent/zenfilters/input.bmp").unwrap_err();
        assert!(matches!(err, BitmapError::Io(_)));
    }
}
