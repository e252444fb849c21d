// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as something a person can look at.

use crate::error::Result;
use crate::raster::Raster;
use image::{GrayImage, Luma};
use itertools::iproduct;
use num_traits::{cast, clamp};

/// Stretch an energy map so its largest value becomes white.  A map
/// with no energy at all stays black.
pub fn energy_to_image(energy: &Raster) -> Result<GrayImage> {
    let (width, height) = energy.dimensions_u32()?;
    let factor = u32::from(energy.as_raw().iter().cloned().max().unwrap_or(0)).max(1);
    let mut out = GrayImage::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let c = u32::from(energy.get_channel(y as usize, x as usize, 0));
        let scaled: u8 = cast(clamp(c * 255 / factor, 0, 255)).unwrap_or(u8::MAX);
        out.put_pixel(x, y, Luma([scaled]));
    }
    Ok(out)
}
