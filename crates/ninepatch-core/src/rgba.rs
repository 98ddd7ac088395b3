//! RGBA pixel value and the marker test
//!
//! # Pixel format
//!
//! A pixel occupies four consecutive bytes: red, green, blue, alpha.

/// Bytes per pixel in every [`Bitmap`](crate::Bitmap) buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Red channel offset within a pixel
pub const RED: usize = 0;
/// Green channel offset within a pixel
pub const GREEN: usize = 1;
/// Blue channel offset within a pixel
pub const BLUE: usize = 2;
/// Alpha channel offset within a pixel
pub const ALPHA: usize = 3;

/// A single RGBA8 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black, the canonical marker color
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque white
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Compose a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Compose an opaque pixel (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Read a pixel from its four bytes in buffer order.
    #[inline]
    pub const fn from_bytes(bytes: &[u8; BYTES_PER_PIXEL]) -> Self {
        Self {
            r: bytes[RED],
            g: bytes[GREEN],
            b: bytes[BLUE],
            a: bytes[ALPHA],
        }
    }

    /// Channels in buffer order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether this pixel is a stretch/padding marker.
    ///
    /// A marker is black with any non-zero alpha: `r == g == b == 0` and
    /// `a != 0`. Everything else, including transparent black, is content.
    #[inline]
    pub fn is_marker(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.a != 0
    }
}

impl From<[u8; BYTES_PER_PIXEL]> for Rgba {
    fn from(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_opaque_black() {
        assert!(Rgba::BLACK.is_marker());
    }

    #[test]
    fn test_marker_accepts_partial_alpha() {
        assert!(Rgba::new(0, 0, 0, 1).is_marker());
        assert!(Rgba::new(0, 0, 0, 128).is_marker());
    }

    #[test]
    fn test_transparent_black_is_content() {
        assert!(!Rgba::TRANSPARENT.is_marker());
    }

    #[test]
    fn test_dark_color_is_content() {
        assert!(!Rgba::rgb(1, 0, 0).is_marker());
        assert!(!Rgba::rgb(0, 1, 0).is_marker());
        assert!(!Rgba::rgb(0, 0, 1).is_marker());
    }

    #[test]
    fn test_byte_order() {
        let px = Rgba::new(10, 20, 30, 40);
        assert_eq!(px.to_bytes(), [10, 20, 30, 40]);
        assert_eq!(Rgba::from_bytes(&[10, 20, 30, 40]), px);
        assert_eq!(Rgba::from([10, 20, 30, 40]), px);
    }
}
