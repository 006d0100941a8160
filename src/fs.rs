//! File-level entry points. Each call opens, uses, and closes its own handle.

use std::path::Path;
use std::vec::Vec;

use enough::Unstoppable;

use crate::decode::{DecodeOutput, DecodeRequest};
use crate::error::PpmError;
use crate::image::Image;

/// Read and decode a P3 or P6 file with default options.
///
/// A truncated body still decodes; check [`DecodeOutput::warning`].
pub fn decode_ppm(path: impl AsRef<Path>) -> Result<DecodeOutput, PpmError> {
    DecodeRequest::new().decode_file(path, Unstoppable)
}

/// Write `image` as binary PPM (P6).
pub fn write_ppm(image: &Image, path: impl AsRef<Path>) -> Result<(), PpmError> {
    let bytes = crate::encode_ppm(image)?;
    write_file(path.as_ref(), &bytes)
}

/// Write a single-channel buffer as binary PGM (P5).
pub fn write_pgm(
    buffer: &[u8],
    width: u32,
    height: u32,
    max_val: u8,
    path: impl AsRef<Path>,
) -> Result<(), PpmError> {
    let bytes = crate::encode_pgm(buffer, width, height, max_val)?;
    write_file(path.as_ref(), &bytes)
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, PpmError> {
    log::trace!("reading {}", path.display());
    std::fs::read(path).map_err(|source| PpmError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), PpmError> {
    log::trace!("writing {} bytes to {}", bytes.len(), path.display());
    std::fs::write(path, bytes).map_err(|source| PpmError::Io {
        path: path.to_path_buf(),
        source,
    })
}
