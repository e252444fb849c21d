// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Seam excision, and the carver that drives the whole pipeline:
//! energy, costs, seam, excise, and around again with the narrower
//! image.

use crate::energy::compute_energy;
use crate::error::{Result, SeamError};
use crate::raster::Raster;
use crate::seamcost::compute_seam_costs;
use crate::seampath::recover_seam;
use log::{debug, info, trace};

// Everything that could make excision read outside the source is
// rejected before the destination is allocated.
fn check_seam(image: &Raster, seam: &[usize]) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    if width < 2 {
        return Err(SeamError::TooNarrow { width });
    }
    if seam.len() != height {
        return Err(SeamError::SeamLength {
            expected: height,
            found: seam.len(),
        });
    }
    match seam.iter().enumerate().find(|&(_, &x)| x >= width) {
        Some((row, &column)) => Err(SeamError::SeamOutOfRange { row, column, width }),
        None => Ok(()),
    }
}

/// Remove one pixel per row, at the column the seam names for that
/// row, and return the image one column narrower.  Remaining pixels
/// keep their left-to-right order.
pub fn excise_seam(image: &Raster, seam: &[usize]) -> Result<Raster> {
    check_seam(image, seam)?;
    let (width, height) = (image.width(), image.height());
    let mut carved = Raster::new(height, width - 1)?;
    for (y, &skip) in seam.iter().enumerate() {
        for (dest_x, x) in (0..width).filter(|&x| x != skip).enumerate() {
            let [r, g, b] = image.get_pixel(y, x);
            carved.set_pixel(y, dest_x, r, g, b);
        }
    }
    Ok(carved)
}

/// One full trip through the pipeline.  Returns the narrower image and
/// the seam that was taken out of it.
pub fn carve_once(image: &Raster) -> Result<(Raster, Vec<usize>)> {
    let energy = compute_energy(image)?;
    let costs = compute_seam_costs(&energy)?;
    let seam = recover_seam(&costs)?;
    trace!("seam: {:?}", seam);
    let carved = excise_seam(image, &seam)?;
    Ok((carved, seam))
}

// Carving recalculates the entire energy map and cost table every
// time.  Only the columns near the last seam actually change, so a
// cache could be added here later.

/// Holds an image and carves vertical seams out of it, one at a time.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    image: Raster,
    removed: usize,
}

impl SeamCarver {
    /// Takes ownership of the image to be carved.
    pub fn new(image: Raster) -> Self {
        SeamCarver { image, removed: 0 }
    }

    pub fn image(&self) -> &Raster {
        &self.image
    }

    /// How many seams have been removed so far.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Remove a single seam, returning it.
    pub fn carve_once(&mut self) -> Result<Vec<usize>> {
        let (carved, seam) = carve_once(&self.image)?;
        self.image = carved;
        self.removed += 1;
        Ok(seam)
    }

    /// Remove `seams` seams.  At least one column always remains.
    pub fn carve_seams(&mut self, seams: usize) -> Result<&Raster> {
        let width = self.image.width();
        if seams >= width {
            return Err(SeamError::TooManySeams { seams, width });
        }
        info!(
            "carving {} seams from a {}x{} image",
            seams,
            width,
            self.image.height()
        );
        for i in 0..seams {
            debug!("i = {}, width = {}", i, self.image.width());
            self.carve_once()?;
        }
        info!(
            "carved image is {}x{}",
            self.image.width(),
            self.image.height()
        );
        Ok(&self.image)
    }

    /// Narrow the image to `newwidth` columns.
    pub fn carve_to_width(&mut self, newwidth: usize) -> Result<&Raster> {
        let width = self.image.width();
        if newwidth > width {
            return Err(SeamError::Upscale {
                width,
                requested: newwidth,
            });
        }
        if newwidth == 0 {
            return Err(SeamError::TooManySeams {
                seams: width,
                width,
            });
        }
        self.carve_seams(width - newwidth)
    }

    /// Give the carved image back.
    pub fn into_image(self) -> Raster {
        self.image
    }
}
