//! ninepatch-io - Reading and writing nine-patch images
//!
//! Decodes image files into RGBA8 [`Bitmap`]s and encodes them back.
//! Every decoded image is normalised to 8-bit RGBA regardless of the
//! stored color type, since marker detection needs all four channels.
//!
//! # Features
//!
//! - `png-format` (default): PNG via the `png` crate

mod error;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
#[cfg(feature = "png-format")]
pub use crate::png::{read_png, write_png};

use ninepatch_core::Bitmap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
        }
    }

    /// Detect the format from the leading bytes of a file.
    pub fn from_magic(header: &[u8]) -> Self {
        const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        if header.starts_with(&PNG_SIGNATURE) {
            Self::Png
        } else {
            Self::Unknown
        }
    }
}

/// Read an image file into an RGBA8 bitmap.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the file is not in a format
/// enabled by the crate features.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let mut file = BufReader::new(File::open(path)?);
    let format = ImageFormat::from_magic(file.fill_buf()?);

    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => read_png(file),
        format => Err(IoError::UnsupportedFormat(format!("{format:?}"))),
    }
}

/// Write a bitmap to an image file.
pub fn write_image<P: AsRef<Path>>(bmp: &Bitmap, path: P, format: ImageFormat) -> IoResult<()> {
    let file = BufWriter::new(File::create(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => write_png(bmp, file),
        format => {
            let _ = (bmp, file);
            Err(IoError::UnsupportedFormat(format!("{format:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_magic() {
        assert_eq!(
            ImageFormat::from_magic(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0]),
            ImageFormat::Png
        );
        assert_eq!(ImageFormat::from_magic(b"BM"), ImageFormat::Unknown);
        assert_eq!(ImageFormat::Png.extension(), "png");
    }
}
