// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cost Table -> Seam
//!
//! Pick the cheapest cell in the bottom row and walk back up, moving
//! at most one column per row.  Ties are always broken the same way:
//! in the bottom row the leftmost minimum wins, and on the way up the
//! cell directly above wins over the left one, which wins over the
//! right one.

use crate::error::{try_alloc, Result};
use crate::twodmap::CostTable;

/// Given a cost table, return the x-coordinate of the seam in each
/// row, top to bottom.  The result has one entry per row, every entry
/// is in `0..width`, and neighbouring entries differ by at most one.
pub fn recover_seam(costs: &CostTable) -> Result<Vec<usize>> {
    let (width, height) = (costs.width(), costs.height());
    let mut path = try_alloc(Some(height), "seam path", height, width)?;
    path.resize(height, 0);

    // Strict less-than keeps the first of several equal minima.
    let bottom = costs.row(height - 1);
    let mut seam_col = (1..width).fold(0, |best, x| {
        if bottom[x] < bottom[best] {
            x
        } else {
            best
        }
    });
    path[height - 1] = seam_col;

    for y in (0..height - 1).rev() {
        let above = costs.row(y);
        let prev_x = seam_col;
        let mut best_value = above[prev_x];
        if prev_x > 0 && above[prev_x - 1] < best_value {
            seam_col = prev_x - 1;
            best_value = above[seam_col];
        }
        if prev_x + 1 < width && above[prev_x + 1] < best_value {
            seam_col = prev_x + 1;
        }
        path[y] = seam_col;
    }
    Ok(path)
}
