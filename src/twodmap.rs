// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::error::{try_alloc, Result, SeamError};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, row-major.  The seam cost
/// accumulator fills one of these with `f64` path costs and hands it
/// to the recoverer.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: usize,
    height: usize,
    cells: Vec<P>,
}

/// Minimum cumulative energy to reach each cell from row 0.
pub type CostTable = TwoDimensionalMap<f64>;

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map filled with `P::default()`.  Both dimensions must be
    /// positive.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { height, width });
        }
        let mut cells = try_alloc(width.checked_mul(height), "cost table", height, width)?;
        cells.resize(width * height, P::default());
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    /// Build a map from row-major cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<P>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { height, width });
        }
        if Some(cells.len()) != width.checked_mul(height) {
            return Err(SeamError::BufferSize {
                expected: width.saturating_mul(height),
                found: cells.len(),
            });
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    // Keep the index math in exactly one place and never touch it.
    fn get_index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// One row, left to right.
    pub fn row(&self, y: usize) -> &[P] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (usize, usize)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
