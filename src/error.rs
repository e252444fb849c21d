// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors produced while carving.
//!
//! Every stage of the pipeline is deterministic, so none of these are
//! worth retrying with the same inputs.

use failure::Fail;
use std::io;

/// Everything that can go wrong between loading an image and writing
/// the carved result back out.
#[derive(Debug, Fail)]
pub enum SeamError {
    /// An output buffer could not be allocated.  The binary treats
    /// this as fatal.
    #[fail(
        display = "unable to allocate the {} for a {}x{} image",
        what, height, width
    )]
    ResourceExhausted {
        what: &'static str,
        height: usize,
        width: usize,
    },

    #[fail(display = "image dimensions must be positive, got {}x{}", height, width)]
    EmptyImage { height: usize, width: usize },

    #[fail(display = "raster buffer holds {} bytes, expected {}", found, expected)]
    BufferSize { expected: usize, found: usize },

    /// Removing a seam would leave an image with no columns.
    #[fail(display = "cannot remove a seam from an image {} column(s) wide", width)]
    TooNarrow { width: usize },

    #[fail(display = "seam has {} rows but the image has {}", found, expected)]
    SeamLength { expected: usize, found: usize },

    #[fail(
        display = "seam column {} at row {} is outside the image (width {})",
        column, row, width
    )]
    SeamOutOfRange {
        row: usize,
        column: usize,
        width: usize,
    },

    #[fail(
        display = "cannot remove {} seams from an image {} columns wide",
        seams, width
    )]
    TooManySeams { seams: usize, width: usize },

    #[fail(
        display = "seam carving cannot widen an image ({} -> {} columns)",
        width, requested
    )]
    Upscale { width: usize, requested: usize },

    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "image codec error: {}", _0)]
    Codec(#[cause] image::ImageError),

    #[fail(display = "malformed raster file: {}", _0)]
    Format(String),
}

impl From<io::Error> for SeamError {
    fn from(err: io::Error) -> Self {
        SeamError::Io(err)
    }
}

impl From<image::ImageError> for SeamError {
    fn from(err: image::ImageError) -> Self {
        SeamError::Codec(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, SeamError>;

// Allocate an empty vector with room for exactly `len` items, turning
// an impossible request into an error rather than an abort.
pub(crate) fn try_alloc<T>(
    len: Option<usize>,
    what: &'static str,
    height: usize,
    width: usize,
) -> Result<Vec<T>> {
    let exhausted = SeamError::ResourceExhausted {
        what,
        height,
        width,
    };
    let len = match len {
        Some(len) => len,
        None => return Err(exhausted),
    };
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| exhausted)?;
    Ok(buf)
}
