//! PNG image format support
//!
//! Decoding expands palettes and low bit depths and strips 16-bit samples
//! to 8 bits, then widens gray and RGB to RGBA. Encoding always writes
//! 8-bit RGBA.

use crate::{IoError, IoResult};
use ninepatch_core::{BYTES_PER_PIXEL, Bitmap};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as RGBA8
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Bitmap> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output color type: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut out = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);

    for row in data.chunks_exact(bytes_per_row).take(height as usize) {
        for px in row[..width as usize * samples].chunks_exact(samples) {
            let rgba = match samples {
                1 => [px[0], px[0], px[0], 255],
                2 => [px[0], px[0], px[0], px[1]],
                3 => [px[0], px[1], px[2], 255],
                _ => [px[0], px[1], px[2], px[3]],
            };
            out.extend_from_slice(&rgba);
        }
    }

    Ok(Bitmap::from_raw(width, height, out)?)
}

/// Write a bitmap as an 8-bit RGBA PNG
pub fn write_png<W: Write>(bmp: &Bitmap, writer: W) -> IoResult<()> {
    if bmp.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode {}x{} image",
            bmp.width(),
            bmp.height()
        )));
    }

    let mut encoder = Encoder::new(writer, bmp.width(), bmp.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(bmp.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninepatch_core::Rgba;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgba() {
        let bmp = Bitmap::from_fn(7, 5, |x, y| {
            Rgba::new(x as u8 * 30, y as u8 * 40, 9, (x * y) as u8)
        })
        .unwrap();

        let mut buffer = Vec::new();
        write_png(&bmp, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(decoded, bmp);
    }

    #[test]
    fn test_png_gray_expands_to_rgba() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 200]).unwrap();
        }
        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(decoded.pixel(1, 0), Some(Rgba::rgb(200, 200, 200)));
    }

    #[test]
    fn test_png_empty_rejected() {
        let bmp = Bitmap::new(0, 3).unwrap();
        assert!(matches!(
            write_png(&bmp, Vec::new()),
            Err(IoError::EncodeError(_))
        ));
    }

    #[test]
    fn test_png_garbage_rejected() {
        let res = read_png(Cursor::new(b"not a png".to_vec()));
        assert!(matches!(res, Err(IoError::DecodeError(_))));
    }
}
