// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image narrowing by vertical seam carving.
//!
//! One iteration runs four stages, each a pure function of its input:
//! [`compute_energy`], [`compute_seam_costs`], [`recover_seam`], and
//! [`excise_seam`].  [`SeamCarver`] repeats them until the image is as
//! narrow as requested.

pub mod dump;
pub mod energy;
pub mod error;
pub mod imageio;
pub mod raster;
pub mod seamcarver;
pub mod seamcost;
pub mod seampath;
mod ternary;
pub mod twodmap;

pub use dump::energy_to_image;
pub use energy::{compute_energy, wrap};
pub use error::{Result, SeamError};
pub use imageio::{load_image, save_image};
pub use raster::Raster;
pub use seamcarver::{carve_once, excise_seam, SeamCarver};
pub use seamcost::compute_seam_costs;
pub use seampath::recover_seam;
pub use twodmap::{CostTable, TwoDimensionalMap};
