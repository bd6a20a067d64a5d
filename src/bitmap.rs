//! CPU-visible single-channel pixel container.

use std::fmt;

use crate::error::{Error, Result};
use crate::image;

/// An 8-bit coverage/intensity image stored row by row.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Constructor.
    ///
    /// `data` must hold exactly `width * height` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidBitmap {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Generates a `size × size` checkerboard, one pixel per cell.
    ///
    /// The top-left pixel is `0xFF`.
    pub fn checkerboard(size: u32) -> Self {
        let data = (0 .. size)
            .flat_map(|y| (0 .. size).map(move |x| if (x + y) % 2 == 0 { 0xFF } else { 0x00 }))
            .collect();
        Self {
            width: size,
            height: size,
            data,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Pixel format to pass to `Factory::write_texture2`.
    pub fn format(&self) -> image::U8 {
        image::U8::R
    }

    /// Renders the bitmap as text for debugging.
    ///
    /// Empty pixels become `' '`, faint ones `'+'` and the rest `'*'`.
    pub fn ascii_art(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.data.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|&b| match b {
                0 => ' ',
                1 ..= 127 => '+',
                _ => '*',
            }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} rows, {} width", self.height, self.width)?;
        f.write_str(&self.ascii_art())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates() {
        let board = Bitmap::checkerboard(8);
        assert_eq!(64, board.data().len());
        assert_eq!(
            &[0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00],
            &board.data()[0 .. 8],
        );
        assert_eq!(
            &[0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF],
            &board.data()[8 .. 16],
        );
        assert_eq!(Some(0xFF), board.get(7, 7));
        assert_eq!(None, board.get(8, 0));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        match Bitmap::new(3, 2, vec![0; 5]) {
            Err(Error::InvalidBitmap { expected: 6, actual: 5 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn ascii_art_buckets_intensity() {
        let bitmap = Bitmap::new(3, 2, vec![0, 64, 200, 127, 128, 0]).unwrap();
        assert_eq!(" +*\n+* \n", bitmap.ascii_art());
        assert!(bitmap.to_string().starts_with("2 rows, 3 width\n"));
    }

    #[test]
    fn empty_bitmap_has_no_rows() {
        let bitmap = Bitmap::new(0, 0, Vec::new()).unwrap();
        assert_eq!("", bitmap.ascii_art());
    }
}
