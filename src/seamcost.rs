// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy Map -> Cost Table
//!
//! A forward dynamic-programming sweep: each cell of the table holds
//! the cheapest total energy of any vertical path from row 0 that ends
//! there.  Unlike the energy calculation, paths do *not* wrap; a seam
//! in column 0 can only come from columns 0 and 1 above it.

use crate::cq;
use crate::error::Result;
use crate::raster::Raster;
use crate::twodmap::CostTable;

/// Build the cost table for an energy map.  The whole table is kept,
/// since recovering the seam walks back up through every row.
pub fn compute_seam_costs(energy: &Raster) -> Result<CostTable> {
    let (width, height) = (energy.width(), energy.height());
    let mut costs = CostTable::new(width, height)?;

    // Populate the first row with their native energies.
    for x in 0..width {
        costs[(x, 0)] = f64::from(energy.get_channel(0, x, 0));
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let parents = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let cheapest = parents
                .map(|px| costs[(px, y - 1)])
                .fold(f64::INFINITY, f64::min);
            costs[(x, y)] = f64::from(energy.get_channel(y, x, 0)) + cheapest;
        }
    }
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Build an energy map from scalar rows.
    fn energy_map(rows: &[&[u8]]) -> Raster {
        let (height, width) = (rows.len(), rows[0].len());
        let data = rows
            .iter()
            .flat_map(|row| row.iter().flat_map(|&e| vec![e, e, e]))
            .collect();
        Raster::from_raw(height, width, data).unwrap()
    }

    #[test]
    fn first_row_is_the_energy() {
        let energy = energy_map(&[&[9, 9, 0, 9, 9], &[9, 1, 9, 8, 9]]);
        let costs = compute_seam_costs(&energy).unwrap();
        assert_eq!(costs.row(0), &[9.0, 9.0, 0.0, 9.0, 9.0]);
    }

    #[test]
    fn costs_accumulate_from_cheapest_parent() {
        let energy = energy_map(&[
            &[9, 9, 0, 9, 9],
            &[9, 1, 9, 8, 9],
            &[9, 9, 9, 9, 0],
            &[9, 9, 9, 0, 9],
        ]);
        let costs = compute_seam_costs(&energy).unwrap();
        assert_eq!(costs.row(1), &[18.0, 1.0, 9.0, 8.0, 18.0]);
        assert_eq!(costs.row(2), &[10.0, 10.0, 10.0, 17.0, 8.0]);
        assert_eq!(costs.row(3), &[19.0, 19.0, 19.0, 8.0, 17.0]);
    }

    #[test]
    fn edges_do_not_wrap() {
        // Column 0 cannot see the zero in the last column above it.
        let energy = energy_map(&[&[5, 5, 0], &[1, 1, 1]]);
        let costs = compute_seam_costs(&energy).unwrap();
        assert_eq!(costs.row(1), &[6.0, 1.0, 1.0]);
    }

    #[test]
    fn single_column_sums_straight_down() {
        let energy = energy_map(&[&[3], &[4], &[5]]);
        let costs = compute_seam_costs(&energy).unwrap();
        assert_eq!(costs[(0, 2)], 12.0);
    }

    #[test]
    fn cost_never_drops_below_local_energy() {
        let energy = energy_map(&[&[7, 0, 3, 2], &[1, 8, 0, 4], &[6, 2, 9, 0]]);
        let costs = compute_seam_costs(&energy).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                assert!(costs[(x, y)] >= f64::from(energy.get_channel(y, x, 0)));
            }
        }
    }
}
