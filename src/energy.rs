// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the colour gradient
//! across it, taken over all three channels:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! Neighbours wrap around the edges: the pixel left of column 0 is
//! the last pixel in the same row, the pixel above row 0 is the last
//! pixel in the same column, and so on, as if the image were wrapped
//! onto a torus.  The result is stored as `⌊e / 10⌋` in a `Raster` of
//! the same size, with the value repeated in all three channels.

use crate::error::Result;
use crate::raster::{Raster, CHANNELS};
use num_traits::{cast, clamp, pow};

/// Toroidal index: maps `i` into `0..bound`, so `-1` becomes
/// `bound - 1` and `bound` becomes `0`.
#[inline]
pub fn wrap(i: isize, bound: usize) -> usize {
    debug_assert!(bound > 0);
    i.rem_euclid(bound as isize) as usize
}

// Squared colour distance between two pixels, summed over channels.
#[inline]
fn energy_of_pair(p1: [u8; 3], p2: [u8; 3]) -> u32 {
    p1.iter()
        .zip(p2.iter())
        .map(|(&c1, &c2)| pow(i32::from(c1) - i32::from(c2), 2) as u32)
        .sum()
}

/// The stored energy of the pixel at `(y, x)`.
#[inline]
pub fn energy_at(image: &Raster, y: usize, x: usize) -> u8 {
    let (width, height) = (image.width(), image.height());
    let (xi, yi) = (x as isize, y as isize);
    let (left, right) = (wrap(xi - 1, width), wrap(xi + 1, width));
    let (up, down) = (wrap(yi - 1, height), wrap(yi + 1, height));

    let dx2 = energy_of_pair(image.get_pixel(y, right), image.get_pixel(y, left));
    let dy2 = energy_of_pair(image.get_pixel(down, x), image.get_pixel(up, x));

    let energy = f64::from(dx2 + dy2).sqrt();
    let scaled = clamp((energy / 10.0).floor(), 0.0, f64::from(u8::MAX));
    cast(scaled).unwrap_or(u8::MAX)
}

// Fill a band of output rows starting at `first_row`.
fn fill_band(image: &Raster, first_row: usize, band: &mut [u8]) {
    let stride = image.width() * CHANNELS;
    for (dy, row) in band.chunks_mut(stride).enumerate() {
        for (x, out) in row.chunks_mut(CHANNELS).enumerate() {
            let e = energy_at(image, first_row + dy, x);
            out.copy_from_slice(&[e, e, e]);
        }
    }
}

/// Compute the energy map of an image.  The map has the same
/// dimensions as the image.
#[cfg(not(feature = "threaded"))]
pub fn compute_energy(image: &Raster) -> Result<Raster> {
    let mut emap = Raster::new(image.height(), image.width())?;
    fill_band(image, 0, emap.as_raw_mut());
    Ok(emap)
}

// Rows are independent of each other, so the image is divvied up into
// one band of rows per CPU and each band is filled on its own thread.

/// Compute the energy map of an image.  The map has the same
/// dimensions as the image.
#[cfg(feature = "threaded")]
pub fn compute_energy(image: &Raster) -> Result<Raster> {
    let mut emap = Raster::new(image.height(), image.width())?;
    let threads = num_cpus::get().max(1);
    let rows_per_band = (image.height() + threads - 1) / threads;
    log::trace!(
        "energy: {} rows in bands of {} across {} threads",
        image.height(),
        rows_per_band,
        threads
    );
    crossbeam::scope(|scope| {
        for (i, band) in emap.bands_mut(rows_per_band).enumerate() {
            scope.spawn(move |_| fill_band(image, i * rows_per_band, band));
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
    Ok(emap)
}
