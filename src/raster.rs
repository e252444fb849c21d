// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The in-memory RGB raster that flows through the pipeline.
//!
//! A `Raster` is three 8-bit channels per pixel, row-major.  Each
//! stage builds a fresh one and hands it on by value; nothing ever
//! modifies a raster after the stage that produced it returns.  The
//! energy stage reuses the same shape for its scalar output, writing
//! the one value into all three channels.

use crate::error::{try_alloc, Result, SeamError};
use image::RgbImage;
use std::convert::TryFrom;

/// Channels per pixel.
pub const CHANNELS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

impl Raster {
    /// A zero-filled raster.  Both dimensions must be positive.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(SeamError::EmptyImage { height, width });
        }
        let len = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(CHANNELS));
        let mut data = try_alloc(len, "raster", height, width)?;
        data.resize(height * width * CHANNELS, 0);
        Ok(Raster {
            height,
            width,
            data,
        })
    }

    /// Wrap an existing row-major RGB sample buffer.
    pub fn from_raw(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(SeamError::EmptyImage { height, width });
        }
        let expected = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(SeamError::ResourceExhausted {
                what: "raster",
                height,
                width,
            })?;
        if data.len() != expected {
            return Err(SeamError::BufferSize {
                expected,
                found: data.len(),
            });
        }
        Ok(Raster {
            height,
            width,
            data,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // All of the index arithmetic lives here and nowhere else.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({}, {}) outside {}x{} raster",
            row,
            col,
            self.height,
            self.width
        );
        (row * self.width + col) * CHANNELS
    }

    /// One channel (0 = red, 1 = green, 2 = blue) of one pixel.
    #[inline]
    pub fn get_channel(&self, row: usize, col: usize, channel: usize) -> u8 {
        assert!(channel < CHANNELS, "channel {} out of range", channel);
        self.data[self.offset(row, col) + channel]
    }

    #[inline]
    pub fn get_pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let i = self.offset(row, col);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, r: u8, g: u8, b: u8) {
        let i = self.offset(row, col);
        self.data[i..i + CHANNELS].copy_from_slice(&[r, g, b]);
    }

    /// The samples of one row, `width * 3` bytes long.
    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.width * CHANNELS;
        &self.data[row * stride..(row + 1) * stride]
    }

    // Disjoint mutable bands of `rows` full rows each (the last band
    // may be shorter), so a stage can fill them independently.
    #[cfg(feature = "threaded")]
    pub(crate) fn bands_mut(&mut self, rows: usize) -> std::slice::ChunksMut<'_, u8> {
        let stride = self.width * CHANNELS;
        self.data.chunks_mut(stride * rows.max(1))
    }

    #[cfg(not(feature = "threaded"))]
    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Width and height as the `image` crate counts them.
    pub(crate) fn dimensions_u32(&self) -> Result<(u32, u32)> {
        let w = encoder_dimension(self.width, self.height, self.width)?;
        let h = encoder_dimension(self.height, self.height, self.width)?;
        Ok((w, h))
    }

    /// Convert to an `image` buffer for encoding.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let (w, h) = self.dimensions_u32()?;
        RgbImage::from_raw(w, h, self.data.clone()).ok_or(SeamError::ResourceExhausted {
            what: "encoder buffer",
            height: self.height,
            width: self.width,
        })
    }
}

// The `image` crate addresses pixels with `u32`.
fn encoder_dimension(n: usize, height: usize, width: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| SeamError::ResourceExhausted {
        what: "encoder buffer",
        height,
        width,
    })
}

impl TryFrom<RgbImage> for Raster {
    type Error = SeamError;

    fn try_from(image: RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Raster::from_raw(height as usize, width as usize, image.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raster_is_black() {
        let r = Raster::new(2, 3).unwrap();
        assert_eq!(r.as_raw().len(), 2 * 3 * 3);
        assert!(r.as_raw().iter().all(|&c| c == 0));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            Raster::new(0, 4),
            Err(SeamError::EmptyImage {
                height: 0,
                width: 4
            })
        ));
        assert!(matches!(
            Raster::new(4, 0),
            Err(SeamError::EmptyImage { .. })
        ));
    }

    #[test]
    fn impossible_size_is_resource_exhausted() {
        assert!(matches!(
            Raster::new(usize::MAX / 2, 4),
            Err(SeamError::ResourceExhausted { what: "raster", .. })
        ));
    }

    #[test]
    fn set_then_get_pixel() {
        let mut r = Raster::new(2, 2).unwrap();
        r.set_pixel(1, 0, 10, 20, 30);
        assert_eq!(r.get_pixel(1, 0), [10, 20, 30]);
        assert_eq!(r.get_channel(1, 0, 2), 30);
        assert_eq!(r.row(1), &[10, 20, 30, 0, 0, 0]);
        assert_eq!(r.row(0), &[0; 6]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_access_panics() {
        let r = Raster::new(2, 2).unwrap();
        r.get_pixel(0, 2);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(matches!(
            Raster::from_raw(1, 2, vec![0; 5]),
            Err(SeamError::BufferSize {
                expected: 6,
                found: 5
            })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversize_dimension_does_not_truncate() {
        let huge = u32::MAX as usize + 1;
        assert!(matches!(
            encoder_dimension(huge, 1, huge),
            Err(SeamError::ResourceExhausted {
                what: "encoder buffer",
                ..
            })
        ));
        assert_eq!(encoder_dimension(640, 480, 640).unwrap(), 640);
    }

    #[test]
    fn converts_through_image_buffer() {
        let data: Vec<u8> = (0..18).collect();
        let r = Raster::from_raw(2, 3, data.clone()).unwrap();
        let img = r.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(1, 1).0, [12, 13, 14]);
        let back = Raster::try_from(img).unwrap();
        assert_eq!(back.into_raw(), data);
    }
}
