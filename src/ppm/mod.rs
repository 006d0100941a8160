//! PPM family codec: reads P3 (ASCII) and P6 (binary) RGB, writes P6 and
//! P5 (binary grayscale).

mod body;
mod encode;
pub(crate) mod header;

use alloc::vec::Vec;

use enough::Stop;

use crate::decode::{DecodeOutput, Strictness};
use crate::error::PpmError;
use crate::image::{FormatTag, Image, rgb_len};
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Which binary sub-format to write.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PnmFormat {
    /// P5 — binary grayscale (PGM).
    Pgm,
    /// P6 — binary RGB (PPM).
    Ppm,
}

impl PnmFormat {
    /// Magic tag written at the start of the file.
    pub fn magic(self) -> &'static str {
        match self {
            PnmFormat::Pgm => "P5",
            PnmFormat::Ppm => "P6",
        }
    }

    fn name(self) -> &'static str {
        match self {
            PnmFormat::Pgm => "PGM",
            PnmFormat::Ppm => "PPM",
        }
    }
}

/// Parsed PPM header (internal).
pub(crate) struct PpmHeader {
    pub format: FormatTag,
    pub width: u32,
    pub height: u32,
    pub max_val: u8,
    pub data_offset: usize,
}

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, PpmError> {
    let header = header::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        max_val: header.max_val,
        format: header.format,
    })
}

/// Decode PPM data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    strictness: Strictness,
    stop: &dyn Stop,
) -> Result<DecodeOutput, PpmError> {
    let header = header::parse_header(data)?;

    if strictness == Strictness::Strict && !header.format.is_supported() {
        return Err(PpmError::UnsupportedFormat(header.format));
    }

    let expected = match limits {
        Some(limits) => limits.rgb_buffer_len(header.width, header.height)?,
        None => rgb_len(header.width, header.height)?,
    };

    stop.check()?;

    let body = data.get(header.data_offset..).unwrap_or_default();
    let (pixels, warning) = body::decode_body(body, &header, expected, stop)?;

    let image = Image::from_parts(
        header.width,
        header.height,
        header.max_val,
        header.format,
        pixels,
    );
    Ok(DecodeOutput::new(image, warning))
}

/// Encode to PPM/PGM (called from EncodeRequest).
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    format: PnmFormat,
    max_val: u8,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PpmError> {
    encode::encode_pnm(pixels, width, height, layout, format, max_val, stop)
}
