//! # zenppm
//!
//! PPM decoder and PPM/PGM encoder, with a couple of pixel transforms.
//!
//! ## Supported Formats
//!
//! - **P3** (PPM ASCII) — decode
//! - **P6** (PPM binary) — decode and encode
//! - **P5** (PGM binary) — encode
//!
//! Samples are always 8-bit. `max_val` is carried through from the header
//! but samples are never rescaled.
//!
//! ## Lenient decoding
//!
//! A binary body shorter than the header declares is not an error: the image
//! is returned at full size with the missing tail zeroed, and
//! [`DecodeOutput::warning`] reports [`DecodeWarning::ShortRead`]. Unknown
//! magic tags decode to a blank image unless [`Strictness::Strict`] is set.
//!
//! ## Non-Goals
//!
//! - Compression, color management, 16-bit samples
//! - Incremental decode
//! - PBM, PGM decode, PAM, PFM
//!
//! ## Usage
//!
//! ```no_run
//! use zenppm::{decode_ppm, write_pgm, write_ppm};
//!
//! let decoded = decode_ppm("in.ppm")?;
//! if let Some(warning) = decoded.warning() {
//!     eprintln!("partial image: {warning:?}");
//! }
//! let mut img = decoded.into_image();
//!
//! let green = img.extract_channel(1)?;
//! write_pgm(&green, img.width(), img.height(), img.max_val(), "green.pgm")?;
//!
//! img.to_grayscale();
//! write_ppm(&img, "gray.ppm")?;
//! # Ok::<(), zenppm::PpmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;
mod transform;

pub mod ppm;

mod decode;
mod encode;
#[cfg(feature = "std")]
mod fs;

use alloc::vec::Vec;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest, DecodeWarning, Strictness};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PpmError;
#[cfg(feature = "std")]
pub use fs::{decode_ppm, write_pgm, write_ppm};
pub use image::{FormatTag, Image};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{Channel, PixelLayout};

/// Decode P3/P6 bytes with default options.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, PpmError> {
    DecodeRequest::new().decode(data, stop)
}

/// Encode `image` as binary PPM (P6), keeping its `max_val`.
pub fn encode_ppm(image: &Image) -> Result<Vec<u8>, PpmError> {
    EncodeRequest::ppm().with_max_val(image.max_val()).encode(
        image.pixels(),
        image.width(),
        image.height(),
        PixelLayout::Rgb8,
        Unstoppable,
    )
}

/// Encode a single-channel buffer as binary PGM (P5).
pub fn encode_pgm(
    buffer: &[u8],
    width: u32,
    height: u32,
    max_val: u8,
) -> Result<Vec<u8>, PpmError> {
    EncodeRequest::pgm()
        .with_max_val(max_val)
        .encode(buffer, width, height, PixelLayout::Gray8, Unstoppable)
}
