//! Owned RGB8 pixel buffer passed between fit strategies.
//! Every strategy consumes a reference and produces a fresh image; nothing
//! mutates a `PixelImage` across a strategy boundary.

use crate::error::{Error, Result};

/// Fixed channel count; all buffers are interleaved RGB.
pub const CHANNELS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelImage {
    /// Wrap an interleaved RGB buffer, validating extent and length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroSizeImage { width, height });
        }
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(Error::InvalidShape {
                detail: format!(
                    "expected {} bytes for {}x{} RGB, got {}",
                    expected,
                    width,
                    height,
                    data.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Single-pixel accessor; `x` and `y` must be in bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let off = (y * self.width + x) * CHANNELS;
        [self.data[off], self.data[off + 1], self.data[off + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_zero_extent() {
        assert!(PixelImage::from_raw(0, 4, vec![]).is_err());
        assert!(PixelImage::from_raw(4, 0, vec![]).is_err());
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(PixelImage::from_raw(2, 2, vec![0u8; 11]).is_err());
        assert!(PixelImage::from_raw(2, 2, vec![0u8; 12]).is_ok());
    }

    #[test]
    fn pixel_reads_interleaved_rgb() {
        let img = PixelImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.pixel(0, 0), [1, 2, 3]);
        assert_eq!(img.pixel(1, 0), [4, 5, 6]);
    }
}
