//! PPM/PGM encoder: P6 and P5, binary samples only.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;

use super::PnmFormat;
use crate::error::PpmError;
use crate::pixel::PixelLayout;

/// Encode pixels to binary PNM.
pub(crate) fn encode_pnm(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    fmt: PnmFormat,
    max_val: u8,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PpmError> {
    if width == 0 || height == 0 {
        return Err(PpmError::InvalidDimensions { width, height });
    }
    if max_val == 0 {
        return Err(PpmError::MaxValOutOfRange(0));
    }

    let w = width as usize;
    let h = height as usize;
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(PpmError::DimensionsTooLarge { width, height })?;
    if pixels.len() < expected {
        return Err(PpmError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }

    stop.check()?;

    let header = format!("{}\n{width} {height}\n{max_val}\n", fmt.magic());
    let out = match fmt {
        PnmFormat::Pgm => encode_pgm(&pixels[..expected], &header, layout)?,
        PnmFormat::Ppm => encode_ppm(&pixels[..expected], &header, w, layout, stop)?,
    };

    log::debug!(
        "encoded {width}x{height} {layout:?} as {}: {} bytes",
        fmt.name(),
        out.len()
    );
    Ok(out)
}

fn encode_pgm(pixels: &[u8], header: &str, layout: PixelLayout) -> Result<Vec<u8>, PpmError> {
    match layout {
        PixelLayout::Gray8 => {
            let mut out = Vec::with_capacity(header.len() + pixels.len());
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(pixels);
            Ok(out)
        }
        _ => Err(PpmError::UnsupportedLayout {
            layout,
            target: "PGM",
        }),
    }
}

fn encode_ppm(
    pixels: &[u8],
    header: &str,
    w: usize,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PpmError> {
    let mut out = Vec::with_capacity(header.len() + pixels.len() * 3 / layout.bytes_per_pixel());
    out.extend_from_slice(header.as_bytes());

    match layout {
        PixelLayout::Rgb8 => {
            out.extend_from_slice(pixels);
        }
        PixelLayout::Gray8 => {
            for (row_idx, row) in pixels.chunks_exact(w).enumerate() {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                for &g in row {
                    out.extend_from_slice(&[g, g, g]);
                }
            }
        }
    }

    Ok(out)
}
