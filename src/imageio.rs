// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting rasters on and off the disk.
//!
//! Files ending in `.bin` use the bare raster layout: the height and
//! then the width, each as an 8-byte little-endian unsigned integer,
//! followed by `height * width * 3` bytes of row-major RGB.  Anything
//! else is handed to the `image` crate and flattened to 8-bit RGB.

use crate::error::{Result, SeamError};
use crate::raster::{Raster, CHANNELS};
use log::debug;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const HEADER_FIELD: usize = 8;

fn is_raw(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("bin"))
        .unwrap_or(false)
}

fn read_dimension<R: Read>(reader: &mut R, name: &str) -> Result<usize> {
    let mut field = [0u8; HEADER_FIELD];
    reader
        .read_exact(&mut field)
        .map_err(|_| SeamError::Format(format!("missing {} in header", name)))?;
    usize::try_from(u64::from_le_bytes(field))
        .map_err(|_| SeamError::Format(format!("{} does not fit in memory", name)))
}

/// Read a bare raster: header, then samples, then nothing.
pub fn read_raw<R: Read>(mut reader: R) -> Result<Raster> {
    let height = read_dimension(&mut reader, "height")?;
    let width = read_dimension(&mut reader, "width")?;
    let expected = height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| SeamError::Format(format!("{}x{} is too large", height, width)))?;

    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    if data.len() != expected {
        return Err(SeamError::Format(format!(
            "{}x{} image needs {} sample bytes, found {}",
            height,
            width,
            expected,
            data.len()
        )));
    }
    Raster::from_raw(height, width, data)
}

/// Write a bare raster in the layout `read_raw` expects.
pub fn write_raw<W: Write>(image: &Raster, mut writer: W) -> Result<()> {
    writer.write_all(&(image.height() as u64).to_le_bytes())?;
    writer.write_all(&(image.width() as u64).to_le_bytes())?;
    writer.write_all(image.as_raw())?;
    writer.flush()?;
    Ok(())
}

/// Load an image from disk, choosing the format by file extension.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let image = if is_raw(path) {
        read_raw(BufReader::new(File::open(path)?))?
    } else {
        Raster::try_from(image::open(path)?.to_rgb8())?
    };
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Save an image to disk, choosing the format by file extension.
pub fn save_image<P: AsRef<Path>>(image: &Raster, path: P) -> Result<()> {
    let path = path.as_ref();
    if is_raw(path) {
        write_raw(image, BufWriter::new(File::create(path)?))?;
    } else {
        image.to_rgb_image()?.save(path)?;
    }
    debug!("wrote {}", path.display());
    Ok(())
}
