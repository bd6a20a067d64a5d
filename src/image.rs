//! CPU-visible pixel formats.

use crate::gl;

use crate::error::{Error, Result};

/// An image pixel format.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// 8-bit unsigned integer format.
    U8(U8),
}

impl Format {
    /// Returns `(data type, channel order)`.
    pub(crate) fn as_gl_enums(&self) -> (u32, u32) {
        match *self {
            Format::U8(U8::R) => (gl::UNSIGNED_BYTE, gl::RED),
            Format::U8(U8::Rgba) => (gl::UNSIGNED_BYTE, gl::RGBA),
        }
    }

    /// Returns the largest row alignment every image of this format meets.
    ///
    /// Single-channel rows may have any length, so they must be unpacked
    /// byte by byte.
    pub(crate) fn unpack_alignment(&self) -> i32 {
        match *self {
            Format::U8(U8::R) => 1,
            Format::U8(U8::Rgba) => 4,
        }
    }

    /// Returns the size of one pixel in bytes.
    pub fn pixel_size(&self) -> usize {
        match *self {
            Format::U8(U8::R) => 1,
            Format::U8(U8::Rgba) => 4,
        }
    }

    /// Returns the number of bytes in a `width` by `height` image.
    ///
    /// Rows are tightly packed: every row length is a multiple of
    /// `unpack_alignment`.
    pub fn byte_len(&self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.pixel_size()
    }

    /// Checks that `actual` bytes hold exactly one `width` by `height` image.
    pub(crate) fn check_len(&self, width: u32, height: u32, actual: usize) -> Result<()> {
        let expected = self.byte_len(width, height);
        if actual == expected {
            Ok(())
        } else {
            Err(Error::InvalidPixelData { expected, actual })
        }
    }
}

impl From<U8> for Format {
    fn from(format: U8) -> Self {
        Format::U8(format)
    }
}

/// Pixel format where every channel is an unsigned 8-bit integer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum U8 {
    /// `[R; R; R; R; R, ...]`
    R,

    /// `[R, G, B, A; R, ...]`
    Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rgba_rows_are_word_aligned() {
        assert_eq!(1, Format::from(U8::R).unpack_alignment());
        assert_eq!(4, Format::from(U8::Rgba).unpack_alignment());
    }

    #[test]
    fn byte_len_counts_every_channel() {
        assert_eq!(64, Format::from(U8::R).byte_len(8, 8));
        assert_eq!(3 * 5 * 4, Format::from(U8::Rgba).byte_len(3, 5));
        assert_eq!(0, Format::from(U8::Rgba).byte_len(0, 5));
    }

    #[test]
    fn short_and_long_pixel_data_is_rejected() {
        let rgba = Format::from(U8::Rgba);
        assert!(rgba.check_len(2, 2, 16).is_ok());
        match rgba.check_len(2, 2, 15) {
            Err(Error::InvalidPixelData { expected: 16, actual: 15 }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match rgba.check_len(2, 2, 20) {
            Err(Error::InvalidPixelData { expected: 16, actual: 20 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
