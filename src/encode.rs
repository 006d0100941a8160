use alloc::vec::Vec;

use enough::Stop;

use crate::error::PpmError;
use crate::pixel::PixelLayout;
use crate::ppm::PnmFormat;

/// Encode builder for binary PPM (P6) and PGM (P5).
///
/// ```
/// use zenppm::{EncodeRequest, PixelLayout, Unstoppable};
///
/// let gray = [0u8, 128, 255, 64];
/// let pgm = EncodeRequest::pgm().encode(&gray, 2, 2, PixelLayout::Gray8, Unstoppable)?;
/// assert!(pgm.starts_with(b"P5\n2 2\n255\n"));
/// # Ok::<(), zenppm::PpmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: PnmFormat,
    max_val: u8,
}

impl EncodeRequest {
    pub fn new(format: PnmFormat) -> Self {
        Self {
            format,
            max_val: 255,
        }
    }

    /// P6 output. Accepts `Rgb8`, or `Gray8` replicated into all channels.
    pub fn ppm() -> Self {
        Self::new(PnmFormat::Ppm)
    }

    /// P5 output. Accepts `Gray8` only.
    pub fn pgm() -> Self {
        Self::new(PnmFormat::Pgm)
    }

    /// Max value written to the header (default 255). Samples are written
    /// unchanged.
    pub fn with_max_val(mut self, max_val: u8) -> Self {
        self.max_val = max_val;
        self
    }

    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        stop: impl Stop,
    ) -> Result<Vec<u8>, PpmError> {
        crate::ppm::encode(
            pixels,
            width,
            height,
            layout,
            self.format,
            self.max_val,
            &stop,
        )
    }

    /// Encode and write to `path`, replacing any existing file.
    #[cfg(feature = "std")]
    pub fn encode_to_file(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
        path: impl AsRef<std::path::Path>,
        stop: impl Stop,
    ) -> Result<(), PpmError> {
        let bytes = self.encode(pixels, width, height, layout, stop)?;
        crate::fs::write_file(path.as_ref(), &bytes)
    }
}
